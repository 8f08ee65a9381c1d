use notification_links::resolver::{unimplemented_resolve, LinkParams, LinkResolver, ResolverError, CLICK_LINK};
use notification_links::template_table::{TemplateTable, TemplateTableLinkResolver};

const LINK_TYPE: &str = "test-type.type-with-links";

/// A resolver that hands every call back to the contract's own body.
struct DelegatingResolver;

impl LinkResolver for DelegatingResolver {
    fn resolve(
        &self,
        msg_type: &str,
        link_name: &str,
        params: &LinkParams,
    ) -> Result<Option<String>, ResolverError> {
        unimplemented_resolve::<Self>(msg_type, link_name, params)
    }
}

fn resolver() -> TemplateTableLinkResolver {
    TemplateTableLinkResolver::new(TemplateTable::new().with(CLICK_LINK, LINK_TYPE, "/path/to/{param1}/url/{param2}"))
}

fn params(pairs: &[(&str, &str)]) -> LinkParams {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn delegating_to_contract_fails_as_not_implemented() {
    let result = DelegatingResolver.resolve("", "", &LinkParams::new());
    match result {
        Err(ResolverError::NotImplemented(name)) => assert!(name.contains("DelegatingResolver")),
        other => panic!("expected NotImplemented, got {other:?}"),
    }
}

#[test]
fn delegating_resolver_fails_behind_trait_object() {
    let resolver: Box<dyn LinkResolver> = Box::new(DelegatingResolver);
    let err = resolver.resolve(LINK_TYPE, CLICK_LINK, &params(&[("param1", "foo")])).unwrap_err();
    assert!(err.to_string().contains("does not implement resolve"));
}

#[test]
fn resolves_well_formed_request() {
    let url = resolver()
        .resolve(LINK_TYPE, CLICK_LINK, &params(&[("param1", "foo"), ("param2", "bar")]))
        .expect("resolve failed");
    assert_eq!(url.as_deref(), Some("/path/to/foo/url/bar"));
}

#[test]
fn unknown_message_type_resolves_to_none() {
    let url = resolver()
        .resolve("test-type.missing-type", CLICK_LINK, &params(&[("param1", "foo"), ("param2", "bar")]))
        .expect("resolve failed");
    assert_eq!(url, None);
}

#[test]
fn unknown_link_name_resolves_to_none() {
    let url = resolver()
        .resolve(LINK_TYPE, "missing_link_name", &params(&[("param1", "foo"), ("param2", "bar")]))
        .expect("resolve failed");
    assert_eq!(url, None);
}

#[test]
fn missing_formatting_param_resolves_to_none() {
    let url = resolver()
        .resolve(LINK_TYPE, CLICK_LINK, &params(&[("param1", "foo")]))
        .expect("resolve failed");
    assert_eq!(url, None, "a partially substituted link must never be returned");
}

#[test]
fn repeated_calls_return_equal_results() {
    let resolver = resolver();
    let full = params(&[("param1", "foo"), ("param2", "bar")]);
    let partial = params(&[("param2", "bar")]);

    let first = resolver.resolve(LINK_TYPE, CLICK_LINK, &full);
    let first_partial = resolver.resolve(LINK_TYPE, CLICK_LINK, &partial);
    for _ in 0..10 {
        assert_eq!(resolver.resolve(LINK_TYPE, CLICK_LINK, &full), first);
        assert_eq!(resolver.resolve(LINK_TYPE, CLICK_LINK, &partial), first_partial);
    }
}

#[test]
fn extra_params_are_ignored() {
    let resolver = resolver();
    let base = resolver
        .resolve(LINK_TYPE, CLICK_LINK, &params(&[("param1", "foo"), ("param2", "bar")]))
        .expect("resolve failed");
    let with_extra = resolver
        .resolve(
            LINK_TYPE,
            CLICK_LINK,
            &params(&[("param1", "foo"), ("param2", "bar"), ("unused", "x"), ("param3", "y")]),
        )
        .expect("resolve failed");
    assert_eq!(base, with_extra);
}

#[test]
fn resolver_built_from_raw_map() {
    let raw = [(
        CLICK_LINK.to_string(),
        [(LINK_TYPE.to_string(), "/items/{id}".to_string())].into_iter().collect(),
    )]
    .into_iter()
    .collect::<std::collections::HashMap<_, _>>();

    let resolver = TemplateTableLinkResolver::new(raw);
    assert_eq!(
        resolver.resolve(LINK_TYPE, CLICK_LINK, &params(&[("id", "42")])),
        Ok(Some("/items/42".to_string()))
    );
}

/// Many tasks share one resolver without locking.
#[tokio::test]
async fn shared_resolver_is_usable_from_concurrent_tasks() {
    let resolver = std::sync::Arc::new(resolver());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let resolver = resolver.clone();
            tokio::spawn(async move {
                let id = i.to_string();
                let p = params(&[("param1", id.as_str()), ("param2", "bar")]);
                resolver.resolve(LINK_TYPE, CLICK_LINK, &p)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let url = handle.await.expect("task panicked").expect("resolve failed");
        assert_eq!(url, Some(format!("/path/to/{i}/url/bar")));
    }
}
