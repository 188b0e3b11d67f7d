//! GetStoreInfoHandler - Static business information for the about and contact pages.

use serde::Serialize;

/// One of the shop's stated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub address: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub opening_hours: Vec<OpeningHours>,
    pub delivery: Vec<&'static str>,
    pub values: Vec<StoreValue>,
    pub currency: String,
}

/// Builds the store information. Only the currency is configurable.
pub struct GetStoreInfoHandler {
    currency: String,
}

impl GetStoreInfoHandler {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn handle(&self) -> StoreInfo {
        StoreInfo {
            name: "Flandeur",
            tagline: "Abu Dhabi's premier luxury flower shop",
            address: "Al Reem Tower, Al Raha Beach, Abu Dhabi, UAE",
            email: "info@flandeur.ae",
            phone: "+971 2 666 6666",
            opening_hours: vec![
                OpeningHours {
                    days: "Sun-Thu",
                    hours: "9 AM - 10 PM",
                },
                OpeningHours {
                    days: "Fri-Sat",
                    hours: "10 AM - 11 PM",
                },
            ],
            delivery: vec![
                "Same-day delivery in Abu Dhabi within 2-4 hours (order before 10 PM)",
                "Next-day delivery to all other Emirates",
                "Freshness guaranteed",
            ],
            values: vec![
                StoreValue {
                    title: "Fresh & Natural",
                    description: "We source the finest blooms from trusted growers around the world, ensuring every arrangement is crafted with the freshest flowers.",
                },
                StoreValue {
                    title: "Made with Love",
                    description: "Each bouquet is designed by our expert florists who pour their creativity and passion into every petal and stem.",
                },
                StoreValue {
                    title: "Same-Day Delivery",
                    description: "Order before 10 PM and receive your flowers within 2-4 hours anywhere in Abu Dhabi. Next-day delivery across the UAE.",
                },
                StoreValue {
                    title: "Premium Quality",
                    description: "We never compromise on quality. From packaging to presentation, every detail is handled with the utmost care.",
                },
            ],
            currency: self.currency.clone(),
        }
    }
}
