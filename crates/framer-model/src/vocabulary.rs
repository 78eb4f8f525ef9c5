//! Controlled vocabularies for legacy codes.
//!
//! Each vocabulary maps a legacy code to its canonical output value. Keys and
//! values are reproduced verbatim from the shop's data, including casing
//! variants and misspellings that occur in the legacy tables. An entry whose
//! value is `None` is a known code that deliberately migrates as missing.

use serde::{Deserialize, Serialize};

/// A single vocabulary entry: legacy code and its canonical value.
pub type Entry = (&'static str, Option<&'static str>);

/// How the raw input is prepared before the exact-match lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPreparation {
    /// Match the input as-is.
    Verbatim,
    /// Trim surrounding whitespace.
    Trim,
    /// Trim whitespace, strip surrounding periods and uppercase.
    SourceCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vocabulary {
    AccountCategory,
    Source,
    OrderStatus,
    OrderStatusV1,
    OrderLocation,
    DeliveryLocation,
    Discount,
    Join,
    FrameManufacturer,
    Mat,
    MatManufacturer,
    MatManufacturerV1,
    Glazing,
    SalesType,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 14] = [
        Vocabulary::AccountCategory,
        Vocabulary::Source,
        Vocabulary::OrderStatus,
        Vocabulary::OrderStatusV1,
        Vocabulary::OrderLocation,
        Vocabulary::DeliveryLocation,
        Vocabulary::Discount,
        Vocabulary::Join,
        Vocabulary::FrameManufacturer,
        Vocabulary::Mat,
        Vocabulary::MatManufacturer,
        Vocabulary::MatManufacturerV1,
        Vocabulary::Glazing,
        Vocabulary::SalesType,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Vocabulary::AccountCategory => "account category",
            Vocabulary::Source => "source",
            Vocabulary::OrderStatus | Vocabulary::OrderStatusV1 => "order status",
            Vocabulary::OrderLocation => "order location",
            Vocabulary::DeliveryLocation => "delivery location",
            Vocabulary::Discount => "discount",
            Vocabulary::Join => "join",
            Vocabulary::FrameManufacturer => "frame manufacturer",
            Vocabulary::Mat => "mat",
            Vocabulary::MatManufacturer | Vocabulary::MatManufacturerV1 => "mat manufacturer",
            Vocabulary::Glazing => "glazing",
            Vocabulary::SalesType => "sales type",
        }
    }

    pub fn key_preparation(self) -> KeyPreparation {
        match self {
            Vocabulary::AccountCategory => KeyPreparation::Trim,
            Vocabulary::Source => KeyPreparation::SourceCode,
            _ => KeyPreparation::Verbatim,
        }
    }

    pub fn entries(self) -> &'static [Entry] {
        match self {
            Vocabulary::AccountCategory => ACCOUNT_CATEGORY,
            Vocabulary::Source => SOURCE,
            Vocabulary::OrderStatus => ORDER_STATUS,
            Vocabulary::OrderStatusV1 => ORDER_STATUS_V1,
            Vocabulary::OrderLocation => ORDER_LOCATION,
            Vocabulary::DeliveryLocation => DELIVERY_LOCATION,
            Vocabulary::Discount => DISCOUNT,
            Vocabulary::Join => JOIN,
            Vocabulary::FrameManufacturer => FRAME_MANUFACTURER,
            Vocabulary::Mat => MAT,
            Vocabulary::MatManufacturer => MAT_MANUFACTURER,
            Vocabulary::MatManufacturerV1 => MAT_MANUFACTURER_V1,
            Vocabulary::Glazing => GLAZING,
            Vocabulary::SalesType => SALES_TYPE,
        }
    }
}

const ACCOUNT_CATEGORY: &[Entry] = &[
    ("Artist", Some("Artist")),
    ("Dealer", Some("Dealer")),
    ("Employee", Some("Employee")),
    ("Gallery", Some("Gallery")),
    ("Other", Some("Other")),
    ("Retail", Some("Retail")),
];

const SOURCE: &[Entry] = &[
    ("ART NE", Some("Art New England")),
    ("BAY WIN", Some("BAY WIN")),
    ("CN", Some("CN")),
    ("CO REF", Some("CO REF")),
    ("COUPON", Some("Coupon")),
    ("CR", Some("CR")),
    ("PC", Some("PC")),
    ("SMFA SALE", Some("SMFA Sale")),
    ("WBUR", Some("WBUR")),
    ("WEB", Some("Web")),
    ("WI", Some("Walk In")),
    ("WLK IN", Some("Walk In")),
    ("WLK", Some("Walk In")),
    ("YLW BK", Some("Yellow Pages")),
    ("YLW PG", Some("Yellow Pages")),
    ("YP", Some("Yellow Pages")),
];

const ORDER_STATUS: &[Entry] = &[
    ("O", Some("Open")),
    ("C", Some("Closed")),
    ("A", Some("Closed")),
    ("X", Some("Closed")),
    ("V", Some("Void")),
];

const ORDER_STATUS_V1: &[Entry] = &[
    ("O", Some("Open")),
    ("C", Some("Closed")),
    ("A", Some("Archived")),
    ("X", Some("Closed")),
];

const ORDER_LOCATION: &[Entry] = &[("BOS", Some("Boston")), ("SOM", Some("Somerville"))];

const DELIVERY_LOCATION: &[Entry] = &[("UPS", Some("Delivery")), ("PU BOS", Some("Boston"))];

const DISCOUNT: &[Entry] = &[
    ("Artist", Some("Artist")),
    ("Dealer", Some("Dealer")),
    ("Donation", Some("Donation")),
    ("Employee", Some("Employee")),
    ("Institution", Some("Institution")),
    ("Other", Some("Other")),
    ("Poster Special", Some("Poster")),
    ("SMFA Art Sale", Some("SMFA")),
    ("Smfa Art Sale", Some("SMFA")),
    ("Verbal", Some("Verbal")),
    ("WBUR", Some("WBUR")),
    ("Wbur", Some("WBUR")),
    ("gallery", Some("Gallery")),
    ("special", Some("Special")),
];

const JOIN: &[Entry] = &[("Nailed", Some("Nailed")), ("Splined", Some("Splined"))];

const FRAME_MANUFACTURER: &[Entry] = &[
    ("AMCI", Some("AMCI")),
    ("AMPF", Some("AMPF")),
    ("AOR", Some("AOR")),
    ("BAF/STANHOPE", Some("Boston Art Framers,Stanhope")),
    ("BOSTON ART FRAM", Some("Boston Art Framers")),
    ("Boston Art Fram", Some("Boston Art Framers")),
    ("CDNV", Some("CDNV")),
    ("CJ", Some("CJ")),
    ("CMI", Some("CMI")),
    ("DECOR", Some("Décor")),
    ("DÉCOR", Some("Décor")),
    ("FEINMAN", Some("Feinman")),
    ("LJ", Some("LJ")),
    ("MAX", Some("MAX")),
    ("NEW LOOK", Some("New Look")),
    ("NIELSEN", Some("Nielsen")),
    ("OEM", Some("OEM")),
    ("OMEGA", Some("Omega")),
    ("OTHER", Some("Other")),
    ("PRESTO", Some("Presto")),
    ("PROVIDED", Some("Provided")),
    ("QUALITY", Some("Quality")),
    ("ROMA", Some("Roma")),
    ("SMALL", Some("Small")),
    ("STANHOPE", Some("Stanhope")),
    ("STUDIO", Some("Studio")),
    ("TURNER", Some("Turner")),
    ("UFP", Some("UFP")),
    ("UPF", Some("UFP")),
    ("décor", Some("Décor")),
];

const MAT: &[Entry] = &[
    ("4 Ply Book", Some("4 Ply Book")),
    ("8 Ply Book", Some("8 Ply Book")),
    ("CUSTOMER", Some("Existing")),
    ("Cold Mount", Some("Cold Mount")),
    ("Dry Mount", Some("Dry Mount")),
    ("Fabric Float", Some("Fabric Float")),
    ("Fabric Mat", Some("Fabric Mat")),
    ("Float", Some("Float")),
    ("n/a", None),
];

const MAT_MANUFACTURER: &[Entry] = &[
    ("Alpha", Some("Alpha")),
    ("Pongee Silk", Some("Pongee")),
    ("Rising", Some("Rising")),
    ("Shantung Silk", Some("Shantung")),
];

const MAT_MANUFACTURER_V1: &[Entry] = &[
    ("ALPHA/RISING", None),
    ("Alpha", Some("Alpha")),
    ("FC", None),
    ("Linen", None),
    ("Linen/rag", None),
    ("Linen/rising", None),
    ("MASONITE", None),
    ("Other", None),
    ("Pongee Silk", Some("Pongee")),
    ("Provided", None),
    ("RISING/ALPHA", None),
    ("Rising", Some("Rising")),
    ("SPO", None),
    ("Shantung Silk", Some("Shantung")),
    ("customer mats", None),
    ("fome core", None),
    ("provided", None),
    ("rising/alpha", None),
];

// "CUSTOMER PLEXI" migrates as an empty string, not as missing.
const GLAZING: &[Entry] = &[
    ("CUSTOMER GLASS", Some("Provided")),
    ("CUSTOMER PLEXI", Some("")),
    ("CUSTOMER", Some("Provided")),
    ("Cons Clear", Some("Conservation Clear")),
    ("Customer Plexi", Some("Provided")),
    ("Customer", Some("Provided")),
    ("Museum Glass", Some("Museum Glass")),
    ("NO GLAZING", None),
    ("NONE", None),
    ("None", None),
    ("OP3 Plexi", Some("OP3 Plexi")),
    ("Optium Museum Plexi", Some("Optium Museum Plexi")),
    ("Provided", Some("Provided")),
    ("REG Plexi", Some("Regular Plexi")),
    ("Reg Glass", Some("Regular Glass")),
    ("Reg Plexi", Some("Regular Plexi")),
    ("n/a", None),
    ("none", None),
    ("prov", Some("Provided")),
    ("provided", Some("Provided")),
];

const SALES_TYPE: &[Entry] = &[
    ("CONS", Some("Conservation")),
    ("HOLD", Some("Hold")),
    ("MATS", Some("Mats")),
    ("MET", Some("Metal")),
    ("OTH", Some("Other")),
    ("SPO", Some("Special Order")),
    ("VOID", Some("Void")),
    ("WHF", Some("Hand-Finished")),
    ("WPF", Some("Pre-Finished")),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn vocabulary_keys_are_unique() {
        for vocabulary in Vocabulary::ALL {
            let mut seen = HashSet::new();
            for (key, _) in vocabulary.entries() {
                assert!(seen.insert(*key), "{} repeats {key}", vocabulary.name());
            }
        }
    }

    #[test]
    fn source_keys_are_prepared_uppercase() {
        for (key, _) in Vocabulary::Source.entries() {
            assert_eq!(key.to_uppercase(), *key);
        }
    }
}
