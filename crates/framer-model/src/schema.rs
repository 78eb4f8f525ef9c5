//! Schema versions and declarative table plans.
//!
//! A [`Schema`] bundles everything that differed between migration runs:
//! the positional layout of each legacy table, the converters applied on
//! load, and one [`TablePlan`] per derived output table. Reshaping code is
//! shared; only these tables change between versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FramerError;
use crate::vocabulary::Vocabulary;

/// Declared schema version of a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// First migration: column subsets only, raw legacy tables exported too.
    V1,
    /// Current migration: cleaned text, fallbacks and audit-trail columns.
    #[default]
    V2,
}

impl SchemaVersion {
    pub fn schema(self) -> &'static Schema {
        match self {
            SchemaVersion::V1 => &SCHEMA_V1,
            SchemaVersion::V2 => &SCHEMA_V2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVersion::V1 => "v1",
            SchemaVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = FramerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(SchemaVersion::V1),
            "v2" | "2" => Ok(SchemaVersion::V2),
            other => Err(FramerError::UnknownSchema(other.to_string())),
        }
    }
}

/// The legacy order sub-tables (working sets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderTable {
    Working,
    Closed,
    Archive,
}

impl OrderTable {
    pub const ALL: [OrderTable; 3] = [OrderTable::Working, OrderTable::Closed, OrderTable::Archive];

    pub fn table_name(self) -> &'static str {
        match self {
            OrderTable::Working => "FrameOrders-Working",
            OrderTable::Closed => "FrameOrders-Closed",
            OrderTable::Archive => "FrameOrders-Archive",
        }
    }
}

impl FromStr for OrderTable {
    type Err = FramerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        OrderTable::ALL
            .into_iter()
            .find(|table| table.table_name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| FramerError::UnknownOrderTable(value.to_string()))
    }
}

/// Name of the legacy customer table.
pub const CUSTOMERS_TABLE: &str = "Customers";

/// Rendering convention for the fractional part of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractionStyle {
    /// `".1/2"`; missing when whole or not a 2/4/8/16 denominator.
    DotPrefixed,
    /// `" 1/2'"`; `"\""` when whole or unparseable.
    QuoteSuffixed,
}

/// How the synthetic order link disambiguates repeated order numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderLinkStrategy {
    /// `ORDER-<row index>` within the concatenated order table.
    #[default]
    RowIndex,
    /// `ORDER-<customer number>`.
    CustomerNumber,
    /// SHA-256 hex digest of the full legacy row.
    Digest,
}

/// Single-value converter applied to one source field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    Verbatim,
    Upper,
    /// Newline runs and control bytes collapsed to a space.
    Text,
    /// Newline runs and control bytes collapsed to `\n`.
    Multiline,
    Flag,
    Timestamp,
    Vocabulary(Vocabulary),
    Salesperson,
    Inches,
    Fraction(FractionStyle),
}

/// A raw column read through a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef {
    pub column: &'static str,
    pub convert: Converter,
}

pub const fn field(column: &'static str, convert: Converter) -> FieldRef {
    FieldRef { column, convert }
}

/// Row-level derivations that need more than one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// "Institution" when any of the flags is set, else "Personal".
    AccountType { flags: &'static [&'static str] },
    /// Preformatted dump of every non-missing raw field.
    LegacyRecord,
    /// Synthetic order link built from the order number.
    OrderLink {
        order: &'static str,
        customer: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// First non-missing converted value, left to right.
    Chain(&'static [FieldRef]),
    Derived(Derivation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetColumn {
    pub name: &'static str,
    pub source: ColumnSource,
}

const fn chain(name: &'static str, fields: &'static [FieldRef]) -> TargetColumn {
    TargetColumn {
        name,
        source: ColumnSource::Chain(fields),
    }
}

const fn derived(name: &'static str, derivation: Derivation) -> TargetColumn {
    TargetColumn {
        name,
        source: ColumnSource::Derived(derivation),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawTable {
    Customers,
    Orders,
}

impl RawTable {
    pub fn name(self) -> &'static str {
        match self {
            RawTable::Customers => "Customers",
            RawTable::Orders => "Orders",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawColumn {
    pub name: &'static str,
    pub load: Converter,
}

const fn raw(name: &'static str, load: Converter) -> RawColumn {
    RawColumn { name, load }
}

/// Positional column names of a legacy table and their load converters.
#[derive(Debug, Clone, Copy)]
pub struct RawLayout {
    pub table: RawTable,
    pub columns: &'static [RawColumn],
}

impl RawLayout {
    pub fn names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name).collect()
    }
}

/// Output table definition: ordered target columns over one raw table.
#[derive(Debug, Clone, Copy)]
pub struct TablePlan {
    pub name: &'static str,
    pub source: RawTable,
    pub columns: &'static [TargetColumn],
}

impl TablePlan {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name).collect()
    }
}

/// A raw legacy table written out unchanged.
#[derive(Debug, Clone, Copy)]
pub struct RawExport {
    pub name: &'static str,
    pub source: RawTable,
}

#[derive(Debug)]
pub struct Schema {
    pub version: SchemaVersion,
    pub customers: RawLayout,
    pub orders: RawLayout,
    /// Customer identifier in the customer table.
    pub customer_key: &'static str,
    /// Customer identifier in the order table.
    pub order_customer_key: &'static str,
    pub order_date: &'static str,
    pub plans: &'static [TablePlan],
    pub raw_exports: &'static [RawExport],
}

impl Schema {
    pub fn layout(&self, table: RawTable) -> &RawLayout {
        match table {
            RawTable::Customers => &self.customers,
            RawTable::Orders => &self.orders,
        }
    }

    pub fn plan(&self, name: &str) -> Option<&TablePlan> {
        self.plans.iter().find(|plan| plan.name == name)
    }
}

use Converter::{Flag, Inches, Multiline, Salesperson, Text, Timestamp, Upper, Verbatim};

const CUSTOMERS_LAYOUT: RawLayout = RawLayout {
    table: RawTable::Customers,
    columns: &[
        raw("Customer Number", Upper),
        raw("Name", Verbatim),
        raw("Category", Verbatim),
        raw("Address", Verbatim),
        raw("City", Verbatim),
        raw("State", Verbatim),
        raw("Zip", Verbatim),
        raw("Telephone", Verbatim),
        raw("Credit", Flag),
        raw("Comment", Verbatim),
        raw("Tax Exempt", Flag),
        raw("Source", Verbatim),
        raw("Date", Timestamp),
        raw("Last Update", Timestamp),
        raw("Last Order", Timestamp),
        raw("Email", Verbatim),
        raw("Deceased", Flag),
    ],
};

// The first migration dumps the customer table as-is, so its flags load
// untouched and convert only where a plan reads them.
const CUSTOMERS_LAYOUT_V1: RawLayout = RawLayout {
    table: RawTable::Customers,
    columns: &[
        raw("Customer Number", Upper),
        raw("Name", Verbatim),
        raw("Category", Verbatim),
        raw("Address", Verbatim),
        raw("City", Verbatim),
        raw("State", Verbatim),
        raw("Zip", Verbatim),
        raw("Telephone", Verbatim),
        raw("Credit", Verbatim),
        raw("Comment", Verbatim),
        raw("Tax Exempt", Verbatim),
        raw("Source", Verbatim),
        raw("Date", Timestamp),
        raw("Last Update", Timestamp),
        raw("Last Order", Timestamp),
        raw("Email", Verbatim),
        raw("Deceased", Verbatim),
    ],
};

const ORDERS_LAYOUT: RawLayout = RawLayout {
    table: RawTable::Orders,
    columns: &[
        raw("OrderNo", Upper),
        raw("OrderDate", Timestamp),
        raw("DueDate", Timestamp),
        raw("SalesCatgy", Verbatim),
        raw("CustomerNo", Upper),
        raw("Qty", Verbatim),
        raw("TotalSale", Verbatim),
        raw("Status", Verbatim),
        raw("Location", Verbatim),
        raw("SalesPers", Verbatim),
        raw("Delivery", Verbatim),
        raw("Artist", Verbatim),
        raw("Comments", Verbatim),
        raw("FrameMfg", Verbatim),
        raw("SalesType", Verbatim),
        raw("DateCompleted", Timestamp),
        raw("FrameNo", Verbatim),
        raw("Discount", Verbatim),
        raw("Cust-Client", Verbatim),
        raw("Joining", Verbatim),
        raw("Frame Width", Verbatim),
        raw("Frame Height", Verbatim),
        raw("Mat", Verbatim),
        raw("MatMfg", Verbatim),
        raw("MatColor", Verbatim),
        raw("MattingSize", Verbatim),
        raw("Glazing", Verbatim),
        raw("ProductionComments", Verbatim),
        raw("BinNo", Verbatim),
        raw("Matting", Verbatim),
        raw("Fitting", Verbatim),
    ],
};

const ACCOUNT_NAME: &[FieldRef] = &[field("Name", Text), field("Customer Number", Verbatim)];

const ORDER_LINK: Derivation = Derivation::OrderLink {
    order: "OrderNo",
    customer: "CustomerNo",
};

const ACCOUNTS_V2: TablePlan = TablePlan {
    name: "Accounts",
    source: RawTable::Customers,
    columns: &[
        chain("Legacy Customer Number", &[field("Customer Number", Verbatim)]),
        chain("Account", ACCOUNT_NAME),
        derived(
            "Account Type",
            Derivation::AccountType {
                flags: &["Tax Exempt", "Credit"],
            },
        ),
        chain("Primary Contact", ACCOUNT_NAME),
        chain(
            "Category",
            &[field(
                "Category",
                Converter::Vocabulary(Vocabulary::AccountCategory),
            )],
        ),
        chain(
            "Source",
            &[field("Source", Converter::Vocabulary(Vocabulary::Source))],
        ),
        chain("Credit", &[field("Credit", Verbatim)]),
        chain("Tax Exempt", &[field("Tax Exempt", Verbatim)]),
        chain("Comments", &[field("Comment", Multiline)]),
        derived("Legacy Customer Record", Derivation::LegacyRecord),
    ],
};

const CONTACTS_V2: TablePlan = TablePlan {
    name: "Contacts",
    source: RawTable::Customers,
    columns: &[
        chain("Account Link", &[field("Customer Number", Verbatim)]),
        chain("Contact", ACCOUNT_NAME),
        chain("Address", &[field("Address", Text)]),
        chain("City", &[field("City", Text)]),
        chain("State", &[field("State", Text)]),
        chain("Zip", &[field("Zip", Text)]),
        chain("Telephone", &[field("Telephone", Text)]),
        chain("Email", &[field("Email", Verbatim)]),
        chain("Removed", &[field("Deceased", Verbatim)]),
    ],
};

const ORDERS_V2: TablePlan = TablePlan {
    name: "Orders",
    source: RawTable::Orders,
    columns: &[
        chain("Order Number", &[field("OrderNo", Verbatim)]),
        chain("Order Date", &[field("OrderDate", Verbatim)]),
        chain("Due Date", &[field("DueDate", Verbatim)]),
        chain("Account Link", &[field("CustomerNo", Verbatim)]),
        chain(
            "Order Status",
            &[field("Status", Converter::Vocabulary(Vocabulary::OrderStatus))],
        ),
        chain(
            "Order Location",
            &[field(
                "Location",
                Converter::Vocabulary(Vocabulary::OrderLocation),
            )],
        ),
        chain(
            "Delivery Location",
            &[
                field(
                    "Delivery",
                    Converter::Vocabulary(Vocabulary::DeliveryLocation),
                ),
                field(
                    "Location",
                    Converter::Vocabulary(Vocabulary::OrderLocation),
                ),
            ],
        ),
        chain("Salesperson Link", &[field("SalesPers", Salesperson)]),
        chain(
            "Discount",
            &[field("Discount", Converter::Vocabulary(Vocabulary::Discount))],
        ),
        chain("Client", &[field("Cust-Client", Verbatim)]),
        derived("Legacy Order ID", ORDER_LINK),
        derived("Legacy Order Record", Derivation::LegacyRecord),
    ],
};

const TREATMENTS_V2: TablePlan = TablePlan {
    name: "Treatments",
    source: RawTable::Orders,
    columns: &[
        derived("Order Link", ORDER_LINK),
        chain("Account Link", &[field("CustomerNo", Verbatim)]),
        chain("Quantity", &[field("Qty", Verbatim)]),
        chain("Price", &[field("TotalSale", Verbatim)]),
        chain(
            "Type",
            &[field("SalesType", Converter::Vocabulary(Vocabulary::SalesType))],
        ),
        chain("Frame Style", &[field("FrameNo", Verbatim)]),
        chain(
            "Frame Manufacturer",
            &[field(
                "FrameMfg",
                Converter::Vocabulary(Vocabulary::FrameManufacturer),
            )],
        ),
        chain(
            "Frame Join",
            &[field("Joining", Converter::Vocabulary(Vocabulary::Join))],
        ),
        chain("Frame Width Inches", &[field("Frame Width", Inches)]),
        chain(
            "Frame Width Fraction",
            &[field(
                "Frame Width",
                Converter::Fraction(FractionStyle::DotPrefixed),
            )],
        ),
        chain("Frame Height Inches", &[field("Frame Height", Inches)]),
        chain(
            "Frame Height Fraction",
            &[field(
                "Frame Height",
                Converter::Fraction(FractionStyle::DotPrefixed),
            )],
        ),
        chain(
            "Matting / Mounting",
            &[field("Mat", Converter::Vocabulary(Vocabulary::Mat))],
        ),
        chain(
            "Mat Manufacturer",
            &[field(
                "MatMfg",
                Converter::Vocabulary(Vocabulary::MatManufacturer),
            )],
        ),
        chain("Mat Color", &[field("MatColor", Verbatim)]),
        chain("Mat Size", &[field("MattingSize", Verbatim)]),
        chain(
            "Glazing",
            &[field("Glazing", Converter::Vocabulary(Vocabulary::Glazing))],
        ),
        chain("Artist", &[field("Artist", Verbatim)]),
        chain("Description", &[field("Comments", Verbatim)]),
        chain(
            "Production Comments",
            &[field("ProductionComments", Verbatim)],
        ),
        chain("Bin Number", &[field("BinNo", Verbatim)]),
    ],
};

const ACCOUNTS_V1: TablePlan = TablePlan {
    name: "Accounts",
    source: RawTable::Customers,
    columns: &[
        derived(
            "Account Type",
            Derivation::AccountType {
                flags: &["Tax Exempt", "Credit"],
            },
        ),
        chain("Account", &[field("Name", Verbatim)]),
        chain("Tax Exempt", &[field("Tax Exempt", Flag)]),
        chain("Credit", &[field("Credit", Flag)]),
        chain("Legacy Customer Number", &[field("Customer Number", Verbatim)]),
        // Field name as configured in the target application.
        chain(
            "Legacy Custom Number Link",
            &[field("Customer Number", Verbatim)],
        ),
    ],
};

const CONTACTS_V1: TablePlan = TablePlan {
    name: "Contacts",
    source: RawTable::Customers,
    columns: &[
        chain("Legacy Customer Number", &[field("Customer Number", Verbatim)]),
        chain("Contact", &[field("Name", Verbatim)]),
        chain("Email", &[field("Email", Verbatim)]),
        chain("Address", &[field("Address", Verbatim)]),
        chain("City", &[field("City", Verbatim)]),
        chain("State", &[field("State", Verbatim)]),
        chain("Zip", &[field("Zip", Verbatim)]),
        chain("Telephone", &[field("Telephone", Verbatim)]),
        chain("Deceased", &[field("Deceased", Flag)]),
    ],
};

const ORDERS_V1: TablePlan = TablePlan {
    name: "Orders",
    source: RawTable::Orders,
    columns: &[
        chain("Order Number", &[field("OrderNo", Verbatim)]),
        chain("Account Link", &[field("CustomerNo", Verbatim)]),
        chain("Salesperson", &[field("SalesPers", Verbatim)]),
        chain("Order Date", &[field("OrderDate", Verbatim)]),
        chain("Due Date", &[field("DueDate", Verbatim)]),
        chain(
            "Order Location",
            &[field(
                "Location",
                Converter::Vocabulary(Vocabulary::OrderLocation),
            )],
        ),
        chain(
            "Order Status",
            &[field(
                "Status",
                Converter::Vocabulary(Vocabulary::OrderStatusV1),
            )],
        ),
        chain(
            "Delivery Location",
            &[field(
                "Delivery",
                Converter::Vocabulary(Vocabulary::DeliveryLocation),
            )],
        ),
        chain("Legacy Order Number Link", &[field("OrderNo", Verbatim)]),
        chain("Legacy Customer Number", &[field("CustomerNo", Verbatim)]),
    ],
};

const TREATMENTS_V1: TablePlan = TablePlan {
    name: "Treatments",
    source: RawTable::Orders,
    columns: &[
        chain("Order Number", &[field("OrderNo", Verbatim)]),
        chain(
            "Order Status",
            &[field(
                "Status",
                Converter::Vocabulary(Vocabulary::OrderStatusV1),
            )],
        ),
        chain(
            "Type",
            &[field("SalesType", Converter::Vocabulary(Vocabulary::SalesType))],
        ),
        chain("Quantity", &[field("Qty", Verbatim)]),
        chain("Frame Width Inches", &[field("Frame Width", Inches)]),
        chain(
            "Frame Width Fraction",
            &[field(
                "Frame Width",
                Converter::Fraction(FractionStyle::QuoteSuffixed),
            )],
        ),
        chain("Frame Height Inches", &[field("Frame Height", Inches)]),
        chain(
            "Frame Height Fraction",
            &[field(
                "Frame Height",
                Converter::Fraction(FractionStyle::QuoteSuffixed),
            )],
        ),
        chain("Frame Style", &[field("FrameNo", Verbatim)]),
        chain(
            "Frame Join",
            &[field("Joining", Converter::Vocabulary(Vocabulary::Join))],
        ),
        chain(
            "Mat Manufacturer",
            &[field(
                "MatMfg",
                Converter::Vocabulary(Vocabulary::MatManufacturerV1),
            )],
        ),
        chain("Mat Size", &[field("MattingSize", Verbatim)]),
        chain("Mat Color", &[field("MatColor", Verbatim)]),
        chain("Price", &[field("TotalSale", Verbatim)]),
        chain("Artist", &[field("Artist", Verbatim)]),
        chain("Description", &[field("Comments", Verbatim)]),
        chain(
            "Production Comments",
            &[field("ProductionComments", Verbatim)],
        ),
    ],
};

static SCHEMA_V1: Schema = Schema {
    version: SchemaVersion::V1,
    customers: CUSTOMERS_LAYOUT_V1,
    orders: ORDERS_LAYOUT,
    customer_key: "Customer Number",
    order_customer_key: "CustomerNo",
    order_date: "OrderDate",
    plans: &[ACCOUNTS_V1, CONTACTS_V1, ORDERS_V1, TREATMENTS_V1],
    raw_exports: &[
        RawExport {
            name: "LegacyCustomers",
            source: RawTable::Customers,
        },
        RawExport {
            name: "LegacyOrders",
            source: RawTable::Orders,
        },
    ],
};

static SCHEMA_V2: Schema = Schema {
    version: SchemaVersion::V2,
    customers: CUSTOMERS_LAYOUT,
    orders: ORDERS_LAYOUT,
    customer_key: "Customer Number",
    order_customer_key: "CustomerNo",
    order_date: "OrderDate",
    plans: &[ACCOUNTS_V2, CONTACTS_V2, ORDERS_V2, TREATMENTS_V2],
    raw_exports: &[],
};
