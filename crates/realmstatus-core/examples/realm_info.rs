use realmstatus_core::RealmCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let realm = "Eitrigg";

    let mut catalog = RealmCatalog::new()?;
    catalog.populate().await?;

    println!("Information for {}", realm);
    match catalog.find_by_name(realm) {
        Some(r) => {
            println!("Type: {}", r.realm_type.as_str());
            println!("Status: {:?}", r.status);
            println!("Population: {}", r.population);
            println!("Locale: {}", r.locale);
        }
        None => println!("No realm named {} on the status page", realm),
    }

    // Uncomment to dump every realm on the page:
    // for r in catalog.realms() {
    //     println!("{}: {:?}", r.name, r.status);
    // }

    Ok(())
}
