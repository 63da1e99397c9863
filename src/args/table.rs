use std::collections::{hash_map, HashMap};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::token::HELP_KEY;
use crate::strings;

/// Flag name to flag value, as produced by the argument parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentTable(HashMap<String, String>);

impl ArgumentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous value when the key was already present.
    pub(crate) fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when `?`, `-?` or `/?` was supplied.
    pub fn is_help_requested(&self) -> bool {
        self.contains_key(HELP_KEY)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(strings::to_boolean)
    }

    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(strings::to_integer)
    }

    pub fn get_decimal(&self, key: &str) -> Option<Decimal> {
        self.get(key).and_then(strings::to_decimal)
    }

    pub fn get_date_time(&self, key: &str) -> Option<NaiveDateTime> {
        self.get(key).and_then(strings::to_date_time)
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl FromIterator<(String, String)> for ArgumentTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ArgumentTable {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<ArgumentTable> for HashMap<String, String> {
    fn from(table: ArgumentTable) -> Self {
        table.0
    }
}
