use crate::{menu::Meal, static_regex};

/// Takes out every match of `re` and returns the leading number of the first.
fn take_number(text: &mut String, re: &regex::Regex) -> Option<u32> {
    static_regex!(LEADING_NUMBER <- r"^[0-9]+");
    let value = re
        .find(text.as_str())
        .and_then(|m| LEADING_NUMBER.find(m.as_str()))
        .and_then(|n| n.as_str().parse().ok())?;
    *text = re.replace_all(text.as_str(), "").into_owned();
    Some(value)
}

impl Meal {
    /// Splits a meal description like `Svíčková 150g 139,-` into name, grams and price.
    pub fn parse(body: &str) -> Self {
        static_regex!(WEIGHT <- r"[0-9]{1,4}\s?g");
        // price with trailing noise like `139,- / 159,- (menu)`
        static_regex!(PRICE <- r"[0-9]{1,3}\s?,-[/\smenu()*]*[\s0-9,-]*");

        let mut text = body.to_owned();
        // weight first: its digits would otherwise run into the price
        let weight = take_number(&mut text, &WEIGHT);
        let base_price = take_number(&mut text, &PRICE);
        let name = text.trim().to_owned();
        Self {
            name,
            weight,
            base_price,
        }
    }
}
