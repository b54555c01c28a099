use chrono::NaiveDate;

use crate::menu::Menu;

/// The last menu that made it through extraction. Only good for the day it
/// is dated.
#[derive(Debug, Default)]
pub struct MenuCache {
    menu: Option<Menu>,
}

impl MenuCache {
    #[inline]
    #[must_use]
    pub fn get(&self, today: NaiveDate) -> Option<&Menu> {
        self.menu.as_ref().filter(|menu| menu.date == today)
    }

    pub fn store(&mut self, menu: Menu) {
        self.menu = Some(menu);
    }
}
