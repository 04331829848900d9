//! Query string construction for list, search and action endpoints.
//!
//! Parameters are kept as ordered `(name, value)` pairs and handed to
//! `reqwest`, which takes care of percent-encoding. Array parameters repeat
//! their `name[]` key once per value, the way Rails expects them.

use std::collections::BTreeMap;

use chargify_core::{
    CustomerId, SortDirection, SubscriptionReactivationData, SubscriptionState,
    TransactionSearchOptions, MAX_PAGE_SIZE,
};

use crate::error::ChargifyError;

/// Date format used by date filters.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Query(Vec<(String, String)>);

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub(crate) fn push(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((name.into(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present.
    pub(crate) fn push_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(name, v),
            None => self,
        }
    }

    /// Append `page` and `per_page`.
    pub(crate) fn page(self, page: u32, per_page: u32) -> Self {
        self.push("page", page).push("per_page", per_page)
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Reject page sizes Chargify would refuse.
pub(crate) fn check_page_size(page_size: u32) -> Result<(), ChargifyError> {
    if page_size > MAX_PAGE_SIZE {
        return Err(ChargifyError::InvalidArgument(format!(
            "page size can't be bigger than {MAX_PAGE_SIZE}"
        )));
    }
    Ok(())
}

/// Subscriptions in `state`, optionally narrowed by metadata values.
pub(crate) fn subscription_search(
    state: SubscriptionState,
    metadata: &BTreeMap<String, String>,
    page: u32,
    per_page: u32,
) -> Query {
    metadata.iter().fold(
        Query::new().page(page, per_page).push("state", state.as_str()),
        |query, (key, value)| query.push(format!("metadata[{key}]"), value),
    )
}

/// Filters for a subscription's statements.
pub(crate) fn statements(
    page: u32,
    per_page: u32,
    sort: Option<&str>,
    direction: Option<SortDirection>,
) -> Result<Query, ChargifyError> {
    check_page_size(per_page)?;
    Ok(Query::new()
        .page(page, per_page)
        .push_opt("sort", sort)
        .push_opt("direction", direction.map(SortDirection::as_str)))
}

/// Filters for a subscription's transactions.
pub(crate) fn transactions(options: &TransactionSearchOptions) -> Result<Query, ChargifyError> {
    check_page_size(options.page_size)?;

    let query = Query::new()
        .page(options.page, options.page_size)
        .push("direction", options.direction.as_str())
        .push_opt("max_id", options.max_id)
        .push_opt("since_id", options.since_id);

    let query = options
        .kinds
        .iter()
        .flatten()
        .fold(query, |query, kind| query.push("kinds[]", kind.as_str()));

    Ok(query
        .push_opt(
            "since_date",
            options.since_date.map(|d| d.format(DATE_FORMAT)),
        )
        .push_opt(
            "until_date",
            options.until_date.map(|d| d.format(DATE_FORMAT)),
        ))
}

/// Options for reactivating a subscription.
pub(crate) fn reactivation(data: &SubscriptionReactivationData) -> Query {
    let query = Query::new()
        .push("include_trial", flag(data.include_trial))
        .push("preserve_balance", flag(data.preserve_balance))
        .push_opt("coupon_code", data.coupon_code.as_deref())
        .push_opt("resume", data.resume);

    if data.forgive_balance {
        query.push("resume[forgive_balance]", true)
    } else {
        query
    }
}

/// Acknowledgement and cascade for purging a subscription.
pub(crate) fn purge(customer_id: &CustomerId) -> Query {
    Query::new()
        .push("ack", customer_id)
        .push("cascade[]", "customer")
        .push("cascade[]", "payment_profile")
}

/// `1`/`0` flag used by reactivation.
fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargify_core::TransactionKind;
    use chrono::NaiveDate;

    fn pairs(query: &Query) -> Vec<(&str, &str)> {
        query
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn subscription_search_orders_metadata_by_key() {
        let metadata = BTreeMap::from([
            ("tier".to_string(), "gold".to_string()),
            ("region".to_string(), "eu".to_string()),
        ]);
        let query = subscription_search(SubscriptionState::Active, &metadata, 2, 50);
        assert_eq!(
            pairs(&query),
            vec![
                ("page", "2"),
                ("per_page", "50"),
                ("state", "active"),
                ("metadata[region]", "eu"),
                ("metadata[tier]", "gold"),
            ]
        );
    }

    #[test]
    fn transactions_include_every_filter() {
        let options = TransactionSearchOptions {
            max_id: Some(900),
            since_id: Some(100),
            ..TransactionSearchOptions::default()
                .page(1, 200)
                .kinds([TransactionKind::Charge, TransactionKind::Payment])
                .between(
                    NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                    NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                )
        };
        let query = transactions(&options).unwrap();
        assert_eq!(
            pairs(&query),
            vec![
                ("page", "1"),
                ("per_page", "200"),
                ("direction", "desc"),
                ("max_id", "900"),
                ("since_id", "100"),
                ("kinds[]", "charge"),
                ("kinds[]", "payment"),
                ("since_date", "2024-01-05"),
                ("until_date", "2024-02-10"),
            ]
        );
    }

    #[test]
    fn transactions_reject_large_pages() {
        let options = TransactionSearchOptions::default().page(1, 201);
        let err = transactions(&options).unwrap_err();
        assert!(matches!(err, ChargifyError::InvalidArgument(_)));
    }

    #[test]
    fn statements_skip_unset_sorting() {
        let query = statements(1, 20, None, None).unwrap();
        assert_eq!(pairs(&query), vec![("page", "1"), ("per_page", "20")]);

        let query = statements(3, 10, Some("created_at"), Some(SortDirection::Asc)).unwrap();
        assert_eq!(
            pairs(&query),
            vec![
                ("page", "3"),
                ("per_page", "10"),
                ("sort", "created_at"),
                ("direction", "asc"),
            ]
        );

        assert!(statements(1, 500, None, None).is_err());
    }

    #[test]
    fn reactivation_flags() {
        let minimal = reactivation(&SubscriptionReactivationData::default());
        assert_eq!(
            pairs(&minimal),
            vec![("include_trial", "0"), ("preserve_balance", "0")]
        );

        let full = reactivation(&SubscriptionReactivationData {
            include_trial: true,
            preserve_balance: true,
            coupon_code: Some("WELCOME 10%".into()),
            resume: Some(false),
            forgive_balance: true,
        });
        assert_eq!(
            pairs(&full),
            vec![
                ("include_trial", "1"),
                ("preserve_balance", "1"),
                ("coupon_code", "WELCOME 10%"),
                ("resume", "false"),
                ("resume[forgive_balance]", "true"),
            ]
        );
    }

    #[test]
    fn purge_acknowledges_customer() {
        let query = purge(&CustomerId::new("8812"));
        assert_eq!(
            pairs(&query),
            vec![
                ("ack", "8812"),
                ("cascade[]", "customer"),
                ("cascade[]", "payment_profile"),
            ]
        );
    }
}
