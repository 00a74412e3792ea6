//! Scrape the public HTML profile page and extract profile data.

use chrono::Utc;
use scraper::Html;

use crate::core::{
    CsClient, CsError, ProfileSource, SourceFuture,
    html::{element_text, selector},
    net,
};

use super::{PlayerProfile, age_on};

pub mod extract;
use extract::{
    flag_country, parse_measurements, place_country, position_value, split_birth, split_label,
};

/// Reads the profile by label-matching paragraphs on the HTML profile page.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupSource;

impl ProfileSource for MarkupSource {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn load_profile<'a>(&'a self, client: &'a CsClient) -> SourceFuture<'a, PlayerProfile> {
        Box::pin(load_from_scrape(client))
    }
}

pub(crate) async fn load_from_scrape(client: &CsClient) -> Result<PlayerProfile, CsError> {
    let url = client.profile_page().clone();
    let body = net::fetch_text(client, url, "profile_html", "html").await?;
    parse_profile_html(&body)
}

/// Build a profile from page markup. Only selector construction can fail;
/// every missing field degrades to `""`.
pub fn parse_profile_html(body: &str) -> Result<PlayerProfile, CsError> {
    let doc = Html::parse_document(body);

    let name = doc
        .select(&selector("h1")?)
        .next()
        .map(|h| element_text(&h))
        .unwrap_or_default();

    let mut paragraphs: Vec<String> = doc
        .select(&selector("#meta p")?)
        .map(|p| element_text(&p))
        .collect();
    if paragraphs.is_empty() {
        paragraphs = doc.select(&selector("p")?).map(|p| element_text(&p)).collect();
    }

    let mut profile = PlayerProfile {
        name,
        team: String::new(),
        position: String::new(),
        height: String::new(),
        weight: String::new(),
        height_metric: String::new(),
        weight_metric: String::new(),
        country: String::new(),
        birthdate: String::new(),
        age: None,
        draft: String::new(),
        experience: String::new(),
        jersey: None,
        last_attended: None,
        headline: None,
    };

    let mut college = None;
    let mut high_school = None;
    let mut birthplace = String::new();

    for text in &paragraphs {
        if profile.height.is_empty() {
            let m = parse_measurements(text);
            if !m.height.is_empty() && !m.weight.is_empty() {
                profile.height = m.height;
                profile.weight = m.weight;
                profile.height_metric = m.height_metric;
                profile.weight_metric = m.weight_metric;
                continue;
            }
        }

        let Some((label, value)) = split_label(text) else {
            continue;
        };
        match label.to_ascii_lowercase().as_str() {
            "position" => profile.position = position_value(value).to_string(),
            "team" => profile.team = value.to_string(),
            "born" => {
                let (date, place) = split_birth(value);
                profile.birthdate = date.to_string();
                birthplace = place.to_string();
            }
            "college" | "colleges" => college = Some(value.to_string()),
            "high school" => high_school = Some(value.to_string()),
            "draft" => profile.draft = value.to_string(),
            "experience" | "career length" => profile.experience = value.to_string(),
            _ => {}
        }
    }

    // Structured attributes beat the visible text where the page carries them.
    if let Some(born) = doc.select(&selector("#necro-birth")?).next()
        && let Some(iso) = born.value().attr("data-birth")
    {
        profile.birthdate = iso.trim().to_string();
    }

    profile.country = doc
        .select(&selector("#meta span.f-i")?)
        .next()
        .and_then(|flag| flag_country(flag.value().classes()))
        .unwrap_or_else(|| place_country(&birthplace).to_string());

    // The number strip lists every number worn; the current one is last.
    let jersey_fallback = selector(".jersey")?;
    profile.jersey = doc
        .select(&selector(".uni_holder a")?)
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty())
        .last()
        .or_else(|| {
            doc.select(&jersey_fallback)
                .map(|el| element_text(&el))
                .find(|t| !t.is_empty())
        });

    profile.last_attended = college.or(high_school);
    profile.age = age_on(&profile.birthdate, Utc::now().date_naive());

    Ok(profile)
}
