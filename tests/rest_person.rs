/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::mock_session;
    use flickr::rest::{FlickrError, Person, RemoteError};
    use serde_json::json;

    fn found_alice() -> String {
        json!({
            "stat": "ok",
            "user": {"nsid": "123", "username": {"_content": "alice"}},
        })
        .to_string()
    }

    fn alice_info() -> String {
        json!({
            "stat": "ok",
            "person": {
                "realname": {"_content": "Alice Example"},
                "location": {"_content": "Cardiff, UK"},
                "photosurl": {"_content": "http://www.flickr.com/photos/123/"},
                "profileurl": {"_content": "http://www.flickr.com/people/123/"},
            },
        })
        .to_string()
    }

    #[tokio::test]
    async fn person_from_username() {
        let (session, transport) = mock_session([found_alice()]);
        let person = Person::from_username(session, "alice").await.unwrap();
        assert_eq!(person.id(), "123");
        assert_eq!(person.username(), "alice");
        assert_eq!(transport.call_count(), 1);

        let params = transport.query_params(0);
        assert!(params.contains(&("method".into(), "flickr.people.findByUsername".into())));
        assert!(params.contains(&("username".into(), "alice".into())));
        assert!(params.contains(&("api_key".into(), "test-api-key".into())));
        assert!(params.contains(&("format".into(), "json".into())));
    }

    #[tokio::test]
    async fn person_from_email() {
        let (session, transport) = mock_session([found_alice()]);
        let person = Person::from_email(session, "alice@example.com")
            .await
            .unwrap();
        assert_eq!(person.id(), "123");

        let params = transport.query_params(0);
        assert!(params.contains(&("method".into(), "flickr.people.findByEmail".into())));
        assert!(params.contains(&("find_email".into(), "alice@example.com".into())));
    }

    #[tokio::test]
    async fn failed_lookup_records_last_error() {
        let (session, transport) = mock_session([
            json!({"stat": "fail", "code": 1, "message": "User not found"}).to_string(),
        ]);
        let err = Person::from_username(session.clone(), "nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::ApiResponse(1, _)));
        assert_eq!(
            session.last_error(),
            Some(RemoteError {
                code: 1,
                message: "User not found".into(),
            })
        );
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn transport_failure_leaves_last_error_untouched() {
        let (session, transport) = mock_session(Vec::<String>::new());
        let err = Person::from_username(session.clone(), "alice")
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::Io(_)));
        assert_eq!(session.last_error(), None);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn garbage_body_fails_deserialization() {
        let (session, _transport) = mock_session(["<html>oops</html>"]);
        let err = Person::from_username(session, "alice").await.unwrap_err();
        assert!(matches!(err, FlickrError::Deserialization(_)));
    }

    #[tokio::test]
    async fn profile_fields_fetched_once() {
        let (session, transport) = mock_session([found_alice(), alice_info()]);
        let person = Person::from_username(session, "alice").await.unwrap();

        assert_eq!(person.real_name().await.unwrap(), "Alice Example");
        assert_eq!(person.location().await.unwrap(), "Cardiff, UK");
        assert_eq!(
            person.photos_url().await.unwrap(),
            "http://www.flickr.com/photos/123/"
        );
        assert_eq!(
            person.profile_url().await.unwrap(),
            "http://www.flickr.com/people/123/"
        );

        // One lookup plus one getInfo, no matter how many accessors ran
        assert_eq!(transport.call_count(), 2);
        let params = transport.query_params(1);
        assert!(params.contains(&("method".into(), "flickr.people.getInfo".into())));
        assert!(params.contains(&("user_id".into(), "123".into())));
    }

    #[tokio::test]
    async fn failed_profile_fetch_retries_on_next_access() {
        let (session, transport) = mock_session([
            found_alice(),
            json!({"stat": "fail", "code": 105, "message": "Service currently unavailable"})
                .to_string(),
            alice_info(),
        ]);
        let person = Person::from_username(session, "alice").await.unwrap();

        assert!(person.real_name().await.is_err());
        assert_eq!(person.real_name().await.unwrap(), "Alice Example");
        assert_eq!(transport.call_count(), 3);

        // Populated now, so no further fetches
        assert_eq!(person.location().await.unwrap(), "Cardiff, UK");
        assert_eq!(transport.call_count(), 3);
    }

    #[tokio::test]
    async fn injected_params_win_over_caller_values() {
        let (session, transport) = mock_session([json!({"stat": "ok"}).to_string()]);
        let _: serde_json::Value = session
            .request(
                "flickr.test.echo",
                &[("api_key", "spoofed"), ("format", "xml"), ("foo", "bar")],
            )
            .await
            .unwrap();

        let params = transport.query_params(0);
        let api_keys: Vec<_> = params.iter().filter(|(k, _)| k == "api_key").collect();
        assert_eq!(api_keys.len(), 1);
        assert_eq!(api_keys[0].1, "test-api-key");
        assert!(params.contains(&("foo".into(), "bar".into())));
        assert!(params.contains(&("format".into(), "json".into())));
        assert!(!params.contains(&("format".into(), "xml".into())));
        assert!(params.contains(&("nojsoncallback".into(), "1".into())));
    }
}
