use std::sync::OnceLock;

use regex::Regex;
use scraper::Selector;

/// A pattern that can be compiled from a source string known at compile time.
pub(crate) trait Compile: Sized {
    fn compile(source: &str) -> Self;
}

impl Compile for Regex {
    fn compile(source: &str) -> Self {
        match Self::new(source) {
            Ok(re) => re,
            Err(e) => panic!("Error compiling static regex {source}: {e}"),
        }
    }
}

impl Compile for Selector {
    fn compile(source: &str) -> Self {
        match Self::parse(source) {
            Ok(sel) => sel,
            Err(e) => panic!("Error parsing static selector {source}: {e:?}"),
        }
    }
}

/// Compiles on first use, then hands out the same value.
#[derive(Debug)]
pub(crate) struct StaticPattern<T> {
    cell: OnceLock<T>,
    source: &'static str,
}

impl<T> StaticPattern<T> {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
        }
    }
}

impl<T: Compile> core::ops::Deref for StaticPattern<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.cell.get_or_init(|| T::compile(self.source))
    }
}

#[macro_export]
macro_rules! static_regex {
    ($x: ident <- $re: literal) => {
        static $x: $crate::parse::static_pattern::StaticPattern<::regex::Regex> =
            $crate::parse::static_pattern::StaticPattern::new($re);
    };
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_pattern::StaticPattern<::scraper::Selector> =
            $crate::parse::static_pattern::StaticPattern::new($sel);
    };
}
