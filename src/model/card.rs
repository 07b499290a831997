//! Card model - a quoted piece of evidence with its citation metadata

use serde::{Deserialize, Serialize};

use super::paragraph::Document;

/// One author entry in a card's citation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub is_person: bool,
    pub description: Option<String>,
    pub id: u64,
}

impl Author {
    /// A blank person entry, as created by "add author"
    pub fn blank(id: u64) -> Self {
        Self {
            name: String::new(),
            is_person: true,
            description: None,
            id,
        }
    }
}

/// A loosely typed date; each component is whatever the user typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDate {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl CardDate {
    pub fn new(month: impl Into<String>, day: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            day: day.into(),
            year: year.into(),
        }
    }
}

/// Single-line text fields of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Tag,
    Title,
    Url,
    SiteName,
}

/// Date fields of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateField {
    Date,
    AccessDate,
}

/// A structured quote: metadata plus formatted paragraphs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub tag: String,
    pub title: String,
    pub authors: Vec<Author>,
    pub date: CardDate,
    pub url: String,
    pub paras: Document,
    pub site_name: String,
    pub access_date: CardDate,
}

impl Card {
    /// A card with only paragraphs filled in
    pub fn with_paragraphs(paras: impl Into<Document>) -> Self {
        Self {
            paras: paras.into(),
            ..Self::default()
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Tag => &self.tag,
            TextField::Title => &self.title,
            TextField::Url => &self.url,
            TextField::SiteName => &self.site_name,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Tag => &mut self.tag,
            TextField::Title => &mut self.title,
            TextField::Url => &mut self.url,
            TextField::SiteName => &mut self.site_name,
        }
    }

    pub fn date(&self, field: DateField) -> &CardDate {
        match field {
            DateField::Date => &self.date,
            DateField::AccessDate => &self.access_date,
        }
    }

    pub fn date_mut(&mut self, field: DateField) -> &mut CardDate {
        match field {
            DateField::Date => &mut self.date,
            DateField::AccessDate => &mut self.access_date,
        }
    }

    /// Id to hand out to the next added author
    pub fn next_author_id(&self) -> u64 {
        self.authors
            .iter()
            .map(|author| author.id + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_json_uses_camel_case_keys() {
        let json = r#"{
            "tag": "Tariffs hurt",
            "siteName": "Example",
            "accessDate": {"month": "May", "day": "4", "year": "2024"},
            "authors": [{"name": "Ada", "isPerson": true, "description": null, "id": 0}],
            "paras": [[{"text": "Hello", "underline": false, "highlight": true}]]
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.tag, "Tariffs hurt");
        assert_eq!(card.site_name, "Example");
        assert_eq!(card.access_date.year, "2024");
        assert_eq!(card.authors[0].name, "Ada");
        assert!(card.paras.paragraphs[0].runs[0].highlight);
        assert!(card.title.is_empty());
    }

    #[test]
    fn test_next_author_id() {
        let mut card = Card::default();
        assert_eq!(card.next_author_id(), 0);
        card.authors.push(Author::blank(4));
        card.authors.push(Author::blank(1));
        assert_eq!(card.next_author_id(), 5);
    }

    #[test]
    fn test_field_accessors() {
        let mut card = Card::default();
        *card.text_mut(TextField::SiteName) = "Wire".to_string();
        card.date_mut(DateField::Date).year = "1999".to_string();
        assert_eq!(card.text(TextField::SiteName), "Wire");
        assert_eq!(card.date(DateField::Date).year, "1999");
        assert_eq!(card.date(DateField::AccessDate), &CardDate::default());
    }
}
