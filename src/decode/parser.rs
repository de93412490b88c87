use crate::constants::LITERALS;
use crate::num::number::parse_number;
use crate::text::string::parse_string;
use crate::types::{Map, Value};
use crate::{Error, ParseOptions, Result, TrailingContent};

use super::cursor::Cursor;

/// Recursive-descent parser, one method per grammar rule.
///
/// Scanning and parsing are fused: each rule reads straight from the cursor
/// and there is no token stream in between.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    max_depth: Option<usize>,
    trailing: TrailingContent,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, options: &ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            max_depth: options.max_depth,
            trailing: options.trailing,
            depth: 0,
        }
    }

    pub(crate) fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_element()?;
        if self.trailing == TrailingContent::Reject && !self.cursor.is_at_end() {
            return Err(self.cursor.unexpected());
        }
        Ok(value)
    }

    fn parse_element(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.cursor.peek() {
            Some(b'[') => {
                self.enter()?;
                self.cursor.bump();
                let value = self.parse_array()?;
                self.depth -= 1;
                Ok(value)
            }
            Some(b'{') => {
                self.enter()?;
                self.cursor.bump();
                let value = self.parse_object()?;
                self.depth -= 1;
                Ok(value)
            }
            Some(b'"') => {
                self.cursor.bump();
                parse_string(&mut self.cursor).map(Value::String)
            }
            _ => self.parse_etc(),
        }
    }

    fn parse_etc(&mut self) -> Result<Value> {
        for (literal, value) in &LITERALS {
            if self.cursor.eat_literal(literal) {
                return Ok(value.clone());
            }
        }
        parse_number(&mut self.cursor).map(Value::Number)
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        if self.cursor.eat(b']') {
            return Ok(Value::Array(Vec::new()));
        }
        let mut items = Vec::new();
        loop {
            items.push(self.parse_element()?);
            if !self.cursor.eat(b',') {
                break;
            }
        }
        self.cursor.expect(b']')?;
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        if self.cursor.eat(b'}') {
            return Ok(Value::Object(Map::new()));
        }
        let mut members = Map::new();
        loop {
            self.parse_member(&mut members)?;
            if !self.cursor.eat(b',') {
                break;
            }
        }
        self.cursor.expect(b'}')?;
        Ok(Value::Object(members))
    }

    /// A later member with the same key replaces the earlier value in place.
    fn parse_member(&mut self, members: &mut Map) -> Result<()> {
        self.cursor.skip_whitespace();
        self.cursor.expect(b'"')?;
        let key = parse_string(&mut self.cursor)?;
        self.cursor.skip_whitespace();
        self.cursor.expect(b':')?;
        let value = self.parse_element()?;
        members.insert(key, value);
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        match self.max_depth {
            Some(limit) if self.depth > limit => Err(Error::DepthLimitExceeded {
                position: self.cursor.position(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}
