//! Copy, contact details and card lists for the landing page.
//!
//! The page treats all of this as read-only data: it is compiled in from
//! `content/site.json`, checked once at startup and then only iterated.

use serde::Deserialize;

use crate::components::icon::Icon;
use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: Hero,
    pub headings: Headings,
    pub services: Vec<ServiceEntry>,
    pub benefits: Vec<BenefitEntry>,
    pub mission: Mission,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub logo_alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub highlight: String,
    pub subtitle: String,
    pub background: String,
    pub background_alt: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub routes_caption: String,
    pub route_from: RouteStop,
    pub route_to: RouteStop,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteStop {
    pub flag: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Headings {
    pub services: String,
    pub services_lead: String,
    pub benefits: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceEntry {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub color_tag: ColorTag,
}

/// Two-stop gradient behind a service icon.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorTag {
    pub from: String,
    pub to: String,
}

impl ColorTag {
    pub fn gradient(&self) -> String {
        format!("linear-gradient(to right, {}, {})", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenefitEntry {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mission {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub lead: String,
    pub offices: Vec<Office>,
    pub email: String,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Office {
    pub name: String,
    /// CSS color for the office heading and its glyphs.
    pub accent: String,
    pub address: String,
    pub phones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub primary_label: String,
    pub call_label: String,
    pub call_number: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub copyright: String,
}

impl SiteContent {
    /// Parses the content bundled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.services.is_empty() {
            return Err(ContentError::MissingSection { section: "services" });
        }
        if self.benefits.is_empty() {
            return Err(ContentError::MissingSection { section: "benefits" });
        }
        if self.contact.offices.is_empty() {
            return Err(ContentError::MissingSection { section: "offices" });
        }

        require("brand", "name", &self.brand.name)?;
        require("hero", "headline", &self.hero.headline)?;
        for service in &self.services {
            require("services", "title", &service.title)?;
        }
        for benefit in &self.benefits {
            require("benefits", "title", &benefit.title)?;
        }
        require("mission", "heading", &self.mission.heading)?;
        require("contact", "email", &self.contact.email)?;
        require("contact", "call_number", &self.contact.cta.call_number)?;

        for office in &self.contact.offices {
            require("offices", "name", &office.name)?;
            if office.phones.iter().all(|phone| phone.trim().is_empty()) {
                return Err(ContentError::NoPhoneNumbers {
                    office: office.name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn require(section: &'static str, field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::BlankField { section, field });
    }
    Ok(())
}

/// `tel:` link for a human-formatted number such as `+212 660-53 14-88`.
pub fn tel_href(number: &str) -> String {
    let dialable: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", dialable)
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> serde_json::Value {
        serde_json::from_str(SITE_JSON).unwrap()
    }

    #[test]
    fn test_bundled_content_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.services.len(), 3);
        assert_eq!(content.benefits.len(), 4);
        assert_eq!(content.contact.offices.len(), 2);
        assert_eq!(content.brand.name, "EAGLE TRANSPORTATION");
    }

    #[test]
    fn test_bundled_services_order_and_icons() {
        let content = SiteContent::load().unwrap();
        let icons: Vec<Icon> = content.services.iter().map(|s| s.icon).collect();
        assert_eq!(icons, vec![Icon::Truck, Icon::Train, Icon::Ship]);
        assert_eq!(content.services[0].title, "Road Freight");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = SiteContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_unknown_icon_is_parse_error() {
        let mut value = bundled();
        value["services"][0]["icon"] = serde_json::json!("rocket");
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_empty_services_rejected() {
        let mut value = bundled();
        value["services"] = serde_json::json!([]);
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::MissingSection { section: "services" }));
    }

    #[test]
    fn test_blank_benefit_title_rejected() {
        let mut value = bundled();
        value["benefits"][2]["title"] = serde_json::json!("   ");
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::BlankField {
                section: "benefits",
                field: "title"
            }
        ));
    }

    #[test]
    fn test_office_without_phones_rejected() {
        let mut value = bundled();
        value["contact"]["offices"][1]["phones"] = serde_json::json!([]);
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        match err {
            ContentError::NoPhoneNumbers { office } => assert_eq!(office, "USA Office"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_color_tag_gradient() {
        let tag = ColorTag {
            from: "#3b82f6".to_string(),
            to: "#4f46e5".to_string(),
        };
        assert_eq!(tag.gradient(), "linear-gradient(to right, #3b82f6, #4f46e5)");
    }

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(tel_href("+212 660-53 14-88"), "tel:+212660531488");
        assert_eq!(tel_href("+1 843-999-4787"), "tel:+18439994787");
    }

    #[test]
    fn test_mailto_href() {
        assert_eq!(mailto_href(" ops@example.com "), "mailto:ops@example.com");
    }
}
