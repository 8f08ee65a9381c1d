//! # Mock Resolver
//!
//! Utilities for testing code that consumes a [`LinkResolver`].
//!
//! Queue expectations with [`MockLinkResolver::expect_resolve`], hand the mock to the
//! code under test, then call [`MockLinkResolver::verify`].
//!
//! ```rust
//! use notification_links::resolver::mock::MockLinkResolver;
//! use notification_links::resolver::{LinkParams, LinkResolver, CLICK_LINK};
//!
//! let mock = MockLinkResolver::new();
//! mock.expect_resolve("type.a", CLICK_LINK).return_some("/a");
//!
//! let link = mock.resolve("type.a", CLICK_LINK, &LinkParams::new()).unwrap();
//! assert_eq!(link.as_deref(), Some("/a"));
//! mock.verify();
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{LinkParams, LinkResolver, ResolverError};

/// An expected `resolve` call and its scripted response.
#[derive(Debug)]
struct Expectation {
    msg_type: String,
    link_name: String,
    response: Result<Option<String>, ResolverError>,
}

/// A resolver that answers from a queue of expectations, in order.
///
/// Panics on a call that does not match the next expectation, or when no
/// expectation is left.
#[derive(Debug, Clone, Default)]
pub struct MockLinkResolver {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<(String, String, LinkParams)>>>,
}

impl MockLinkResolver {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `resolve` call for `link_name` on `msg_type`.
    pub fn expect_resolve(&self, msg_type: impl Into<String>, link_name: impl Into<String>) -> ResolveExpectationBuilder {
        ResolveExpectationBuilder {
            msg_type: msg_type.into(),
            link_name: link_name.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Params received by each call so far, with the message type and link name.
    pub fn calls(&self) -> Vec<(String, String, LinkParams)> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl LinkResolver for MockLinkResolver {
    fn resolve(
        &self,
        msg_type: &str,
        link_name: &str,
        params: &LinkParams,
    ) -> Result<Option<String>, ResolverError> {
        self.calls
            .lock()
            .unwrap()
            .push((msg_type.to_string(), link_name.to_string(), params.clone()));

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.msg_type == msg_type && exp.link_name == link_name => exp.response,
            Some(exp) => panic!(
                "Unexpected resolve({msg_type:?}, {link_name:?}); expected resolve({:?}, {:?})",
                exp.msg_type, exp.link_name
            ),
            None => panic!("Unexpected resolve({msg_type:?}, {link_name:?}); no expectations left"),
        }
    }
}

/// Builder for `resolve` expectations.
pub struct ResolveExpectationBuilder {
    msg_type: String,
    link_name: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ResolveExpectationBuilder {
    /// Sets the expectation to return a link.
    pub fn return_some(self, link: impl Into<String>) {
        self.push(Ok(Some(link.into())));
    }

    /// Sets the expectation to return no link.
    pub fn return_none(self) {
        self.push(Ok(None));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ResolverError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<String>, ResolverError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            msg_type: self.msg_type,
            link_name: self.link_name,
            response,
        });
    }
}
