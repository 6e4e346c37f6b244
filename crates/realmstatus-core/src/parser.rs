//! HTML parser for the realm status page
//!
//! Extracts one [`Realm`] per row of the status table. The page is queried
//! with five independent selectors (name, status, type, population, locale)
//! whose results are assumed to line up positionally: the i-th match of each
//! query belongs to the i-th realm. That alignment is a fragility of the
//! source format, so the counts are checked explicitly before any records
//! are built.

use scraper::{Html, Selector};

use crate::error::{RealmStatusError, Result};
use crate::types::{Realm, RealmStatus, RealmType};

/// Parse the realm table from status page HTML.
///
/// Malformed markup is tolerated: html5ever repairs what it can and
/// anything unparseable simply doesn't match the selectors. The only fatal
/// parse condition is a count mismatch between the five column queries.
///
/// # Arguments
/// * `html` - Raw HTML content of the status page
///
/// # Returns
/// * `Ok(Vec<Realm>)` with one record per realm, in page order
/// * `Err(RealmStatusError::MalformedDocument)` if the column queries
///   disagree on how many realms the page contains
pub fn parse_realm_table(html: &str) -> Result<Vec<Realm>> {
    let document = Html::parse_document(html);

    let names = select_texts(&document, "td.name")?;
    let statuses = select_attrs(&document, "td.status div", "class")?;
    let types = select_texts(&document, "td.type span")?;
    let populations = select_texts(&document, "td.population span")?;
    let locales = select_texts(&document, "td.locale")?;

    // The name query defines the record count; every other query must agree
    // or field values would silently attach to the wrong realm.
    check_count("status", names.len(), statuses.len())?;
    check_count("type", names.len(), types.len())?;
    check_count("population", names.len(), populations.len())?;
    check_count("locale", names.len(), locales.len())?;

    let realms = names
        .into_iter()
        .zip(statuses)
        .zip(types)
        .zip(populations)
        .zip(locales)
        .map(|((((name, status), type_label), population), locale)| Realm {
            name,
            status: parse_status_class(&status),
            realm_type: RealmType::from_label(strip_label(&type_label)),
            population,
            locale,
        })
        .collect();

    Ok(realms)
}

/// Collect the trimmed text content of every element matching `selector`.
fn select_texts(document: &Html, selector: &str) -> Result<Vec<String>> {
    let selector = Selector::parse(selector)
        .map_err(|e| RealmStatusError::Parse(format!("Invalid selector: {:?}", e)))?;

    Ok(document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect())
}

/// Collect the value of `attr` from every element matching `selector`.
///
/// Elements missing the attribute contribute an empty string so that the
/// positional alignment with the other queries is preserved.
fn select_attrs(document: &Html, selector: &str, attr: &str) -> Result<Vec<String>> {
    let selector = Selector::parse(selector)
        .map_err(|e| RealmStatusError::Parse(format!("Invalid selector: {:?}", e)))?;

    Ok(document
        .select(&selector)
        .map(|el| el.value().attr(attr).unwrap_or_default().trim().to_string())
        .collect())
}

fn check_count(field: &'static str, expected: usize, found: usize) -> Result<()> {
    if found != expected {
        return Err(RealmStatusError::MalformedDocument {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

/// Derive the realm status from the indicator's class attribute.
///
/// The indicator carries a class list like `"status up"`; the second
/// whitespace-separated token is the status. A missing second token maps to
/// `Unrecognized("")`.
pub fn parse_status_class(class_value: &str) -> RealmStatus {
    let token = class_value.split_whitespace().nth(1).unwrap_or_default();
    RealmStatus::from_token(token)
}

/// Strip exactly one leading and one trailing character from a trimmed
/// type label.
///
/// The page wraps the label in single decoration characters, e.g. `(PvE)`.
/// The stripping is generic over the bracket style. Labels shorter than two
/// characters are returned as-is.
pub fn strip_label(label: &str) -> &str {
    let trimmed = label.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => chars.as_str(),
        _ => trimmed,
    }
}
