use notification_links::resolver::{LinkParams, LinkResolver, CLICK_LINK};
use notification_links::runtime::setup_tracing;
use notification_links::template_table::{TemplateTable, TemplateTableLinkResolver};

/// Resolution behaves the same with a global subscriber installed.
#[test]
fn resolves_with_tracing_enabled() {
    setup_tracing();
    tracing::info!("Tracing initialized");

    let resolver = TemplateTableLinkResolver::new(TemplateTable::new().with(CLICK_LINK, "t", "/t/{id}"));
    let params: LinkParams = [("id".to_string(), "1".to_string())].into_iter().collect();

    assert_eq!(resolver.resolve("t", CLICK_LINK, &params), Ok(Some("/t/1".to_string())));
    assert_eq!(resolver.resolve("t", CLICK_LINK, &LinkParams::new()), Ok(None));
    assert_eq!(resolver.resolve("t", "_other", &params), Ok(None));
}
