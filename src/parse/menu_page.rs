use chrono::{NaiveDate, NaiveDateTime};
use scraper::Html;

use super::{category::classify, clean::clean, date::fresh_date, Error, Result};
use crate::{
    menu::{CategoryKind, Meal, MealCategory, Menu},
    static_selector,
};

/// What a single cleaned line contributes to the menu.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// `Header: body`, body possibly empty
    Header(CategoryKind, &'a str),
    /// belongs to whatever category came last
    Meal(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        match line.split_once(':') {
            Some((header, body)) => match classify(header) {
                Some(kind) => Self::Header(kind, body.strip_prefix(' ').unwrap_or(body)),
                None => Self::Meal(line),
            },
            None => Self::Meal(line),
        }
    }
}

/// Builds the category list from the menu lines following the date line.
pub fn assemble<'a>(date: NaiveDate, lines: impl IntoIterator<Item = &'a str>) -> Menu {
    let mut categories: Vec<MealCategory> = vec![];
    for line in lines {
        match Line::classify(line) {
            Line::Header(kind, body) => {
                let mut category = MealCategory::new(kind);
                if !body.is_empty() {
                    category.meals.push(Meal::parse(body));
                }
                categories.push(category);
            }
            Line::Meal(text) => match categories.last_mut() {
                Some(category) => category.meals.push(Meal::parse(text)),
                None => log::debug!("dropping line before any category: {text:?}"),
            },
        }
    }
    Menu { date, categories }
}

/// The cleaned text of every menu row on the page, in document order.
pub fn rows(html: &str) -> Vec<String> {
    static_selector!(ROW_SELECTOR <- ".tweet_list > p");
    let document = Html::parse_document(html);
    document
        .select(&ROW_SELECTOR)
        .map(|row| clean(&row.inner_html()))
        .collect()
}

impl Menu {
    /// Runs the whole extraction on a fetched page. `now` decides whether the
    /// page still shows yesterday's menu.
    pub fn from_html(html: &str, now: NaiveDateTime) -> Result<Self> {
        let rows = rows(html);
        let (date_line, lines) = rows
            .split_first()
            .ok_or_else(|| Error::malformed("no menu rows on the page"))?;
        let date = fresh_date(date_line, now)?;
        let menu = assemble(date, lines.iter().map(String::as_str));
        log::info!(
            "extracted menu for {date} with {} categories",
            menu.categories.len()
        );
        Ok(menu)
    }

    pub fn from_bytes(bytes: &[u8], now: NaiveDateTime) -> Result<Self> {
        let html = std::str::from_utf8(bytes)
            .map_err(|e| Error::MalformedContent(format!("page is not utf-8: {e}")))?;
        Self::from_html(html, now)
    }
}
