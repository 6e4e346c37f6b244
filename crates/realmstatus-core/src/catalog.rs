//! Realm catalog with memoized population
//!
//! The catalog owns the HTTP client and the parsed realm records. It fetches
//! and parses the status page at most once per instance: construction does
//! no I/O, the first successful [`RealmCatalog::populate`] stores the
//! records, and every later call is a no-op. All other methods only read the
//! stored records, keeping calls to the status page at a minimum.

use crate::client::{ClientConfig, RealmStatusClient};
use crate::error::Result;
use crate::parser::parse_realm_table;
use crate::types::{Realm, RealmStatus, RealmType};

/// In-memory catalog of realm records keyed by realm name
///
/// # Example
/// ```no_run
/// use realmstatus_core::RealmCatalog;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut catalog = RealmCatalog::new()?;
///     catalog.populate().await?;
///
///     if let Some(realm) = catalog.find_by_name("Eitrigg") {
///         println!("{} is {:?}", realm.name, realm.status);
///     }
///     Ok(())
/// }
/// ```
pub struct RealmCatalog {
    /// HTTP client used for the single population fetch
    client: RealmStatusClient,
    /// Parsed records; `None` until `populate` succeeds
    realms: Option<Vec<Realm>>,
}

impl RealmCatalog {
    /// Create an unpopulated catalog for the US status page.
    ///
    /// Construction performs no network access; call [`populate`] to load
    /// the records.
    ///
    /// [`populate`]: RealmCatalog::populate
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(RealmStatusClient::new()?))
    }

    /// Create an unpopulated catalog with custom client configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_client(RealmStatusClient::with_config(config)?))
    }

    /// Create an unpopulated catalog around a pre-configured client.
    pub fn with_client(client: RealmStatusClient) -> Self {
        Self {
            client,
            realms: None,
        }
    }

    /// Fetch and parse the status page, storing the result.
    ///
    /// Idempotent: once the catalog is populated this returns immediately
    /// without touching the network. On failure nothing is stored, the
    /// catalog stays unpopulated, and a later call may try again.
    ///
    /// # Errors
    /// * `RealmStatusError::Http` - the status page could not be fetched
    /// * `RealmStatusError::MalformedDocument` - the page structure has
    ///   drifted from what the parser expects
    pub async fn populate(&mut self) -> Result<()> {
        if self.realms.is_some() {
            return Ok(());
        }

        let html = self.client.fetch().await?;
        self.realms = Some(parse_realm_table(&html)?);

        Ok(())
    }

    /// Whether a populate call has succeeded.
    pub fn is_populated(&self) -> bool {
        self.realms.is_some()
    }

    /// All realm records in page order.
    ///
    /// Empty if the catalog has never been successfully populated.
    pub fn realms(&self) -> &[Realm] {
        self.realms.as_deref().unwrap_or_default()
    }

    /// Find a realm by its exact name.
    ///
    /// Linear scan returning the first match; realm names are assumed
    /// unique on the status page but this is not enforced.
    pub fn find_by_name(&self, name: &str) -> Option<&Realm> {
        self.realms().iter().find(|realm| realm.name == name)
    }

    /// Status of the named realm, or `None` if no such realm exists.
    pub fn status_of(&self, name: &str) -> Option<&RealmStatus> {
        self.find_by_name(name).map(|realm| &realm.status)
    }

    /// Type of the named realm, or `None` if no such realm exists.
    pub fn type_of(&self, name: &str) -> Option<&RealmType> {
        self.find_by_name(name).map(|realm| &realm.realm_type)
    }

    /// Population level of the named realm, or `None` if no such realm
    /// exists. A realm whose population cell is empty yields `Some("")`,
    /// so absence is always distinguishable from an empty field.
    pub fn population_of(&self, name: &str) -> Option<&str> {
        self.find_by_name(name).map(|realm| realm.population.as_str())
    }

    /// Locale of the named realm, or `None` if no such realm exists.
    pub fn locale_of(&self, name: &str) -> Option<&str> {
        self.find_by_name(name).map(|realm| realm.locale.as_str())
    }
}
