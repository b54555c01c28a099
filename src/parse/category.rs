use crate::menu::CategoryKind;

/// Header keywords per category. Checked top to bottom, first hit wins, so a
/// header like "Steak salát" lands in `Salad`.
static KEYWORDS: [(CategoryKind, &[&str]); 7] = [
    (CategoryKind::Soup, &["polévka"]),
    (CategoryKind::Daily, &["hlavní chod"]),
    (CategoryKind::Salad, &["salát", "salad"]),
    (CategoryKind::Burger, &["burger"]),
    (CategoryKind::Special, &["special", "speciál", "specialita"]),
    (CategoryKind::Pasta, &["pasta", "těstoviny"]),
    (CategoryKind::Steak, &["steak", "stejk"]),
];

pub fn classify(header: &str) -> Option<CategoryKind> {
    let header = header.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| header.contains(k)))
        .map(|(kind, _)| *kind)
}
