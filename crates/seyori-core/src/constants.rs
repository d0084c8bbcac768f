/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const CONTACTS_ROUTE_COMPONENT: &str = "contacts";
pub const CONTACTS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", CONTACTS_ROUTE_COMPONENT);

pub const EXPORT_ROUTE_COMPONENT: &str = "export";
pub const EXPORT_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", EXPORT_ROUTE_COMPONENT);

/// Attachment filename used by the vCard export endpoint.
pub const EXPORT_FILENAME: &str = "seyori_contacts.vcf";

/// Response header carrying the number of exported contacts.
pub const CONTACT_COUNT_HEADER: &str = "x-contact-count";
