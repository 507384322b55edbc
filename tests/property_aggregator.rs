//! Property-based tests for credential aggregation.

use proptest::prelude::*;

use feedauth::domain::models::ExternalAuthInfo;
use feedauth::services::aggregator::aggregate;

fn supported_auth_info() -> impl Strategy<Value = ExternalAuthInfo> {
    let uri = "[a-z]{1,8}".prop_map(|s| format!("https://{s}"));
    let secret = "[a-zA-Z0-9]{1,16}";
    prop_oneof![
        (uri.clone(), secret).prop_map(|(feed_uri, token)| ExternalAuthInfo::Token {
            feed_uri,
            token,
        }),
        (uri, "[a-z]{1,8}", secret).prop_map(|(feed_uri, username, password)| {
            ExternalAuthInfo::UsernamePassword { feed_uri, username, password }
        }),
    ]
}

proptest! {
    /// Supported-only input aggregates to a container of the same length,
    /// in the same order, with field presence matching the kind.
    #[test]
    fn supported_input_preserves_length_and_order(
        input in prop::collection::vec(supported_auth_info(), 1..16)
    ) {
        let container = aggregate(&input).unwrap().unwrap();
        prop_assert_eq!(container.endpoint_credentials.len(), input.len());

        for (record, auth_info) in container.endpoint_credentials.iter().zip(&input) {
            prop_assert_eq!(record.endpoint.as_str(), auth_info.feed_uri());
            match auth_info {
                ExternalAuthInfo::UsernamePassword { username, password, .. } => {
                    prop_assert_eq!(record.username.as_deref(), Some(username.as_str()));
                    prop_assert_eq!(record.password.as_str(), password.as_str());
                }
                ExternalAuthInfo::Token { token, .. } => {
                    prop_assert!(record.username.is_none());
                    prop_assert_eq!(record.password.as_str(), token.as_str());
                }
                ExternalAuthInfo::Other { .. } => unreachable!(),
            }
        }
    }

    /// One unsupported element anywhere in the batch poisons the whole
    /// aggregation.
    #[test]
    fn one_unsupported_element_poisons_the_batch(
        mut input in prop::collection::vec(supported_auth_info(), 1..16),
        bad_index in 0usize..16,
    ) {
        let bad_index = bad_index % input.len();
        input[bad_index] = ExternalAuthInfo::Other {
            feed_uri: "https://bad".to_string(),
            kind: "ApiKey".to_string(),
        };
        prop_assert!(aggregate(&input).is_err());
    }
}
