mod verify {
    use crate::{
        error::AuthError,
        helpers::{sign_token_parts, TokenBuilder},
        tests::fixtures::Identities,
        time::now,
        token::{Token, TokenHeader, TokenUser},
        verifier::TokenVerifier,
    };
    use std::str::FromStr;

    #[test]
    fn it_verifies_a_token_signed_by_the_platform_key() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        let token = TokenBuilder::issued_by(&identities.issuer_key)
            .with_scope("PROGRAM-PACA-AU.READ")
            .with_lifetime(60)
            .sign()
            .unwrap();

        let claims = verifier.decode_token(&token).unwrap();
        assert_eq!(claims.scopes(), ["PROGRAM-PACA-AU.READ"]);
        assert!(verifier.is_valid_jwt(&token));
    }

    #[test]
    fn it_round_trips_through_encode() {
        let identities = Identities::new();

        let token_string = TokenBuilder::issued_by(&identities.issuer_key)
            .with_scope("PROGRAM-TEST-CA.WRITE")
            .with_lifetime(60)
            .for_subject("researcher@example.com")
            .sign()
            .unwrap();

        let token = Token::from_str(&token_string).unwrap();
        assert_eq!(token.encode().unwrap(), token_string);

        let reparsed = Token::from_str(&token.encode().unwrap()).unwrap();
        assert_eq!(reparsed.claims(), token.claims());
    }

    #[test]
    fn it_carries_user_metadata_through_verification() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        let token = TokenBuilder::issued_by(&identities.issuer_key)
            .with_scope("PROGRAM-PACA-AU.READ")
            .with_lifetime(60)
            .for_user(TokenUser {
                email: Some("researcher@example.com".to_string()),
                status: Some("APPROVED".to_string()),
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                user_type: Some("USER".to_string()),
            })
            .sign()
            .unwrap();

        let claims = verifier.decode_token(&token).unwrap();
        let user = claims.context.user.unwrap();
        assert_eq!(user.email.as_deref(), Some("researcher@example.com"));
        assert_eq!(user.status.as_deref(), Some("APPROVED"));
    }

    #[test]
    fn it_rejects_a_token_signed_with_the_wrong_key() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        let forged = TokenBuilder::issued_by(&identities.rogue_key)
            .with_scope("PROGRAMSERVICE.WRITE")
            .with_lifetime(60)
            .sign()
            .unwrap();

        assert!(matches!(
            verifier.decode_token(&forged),
            Err(AuthError::InvalidSignature)
        ));
        assert!(!verifier.is_valid_jwt(&forged));
    }

    #[test]
    fn it_rejects_an_expired_token() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        let expired = TokenBuilder::issued_by(&identities.issuer_key)
            .with_scope("PROGRAM-PACA-AU.READ")
            .with_expiration(now() - 3600)
            .sign()
            .unwrap();

        assert!(matches!(
            verifier.decode_token(&expired),
            Err(AuthError::Expired)
        ));
        assert!(!verifier.is_valid_jwt(&expired));
    }

    #[test]
    fn it_rejects_a_downgraded_algorithm() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        // Correctly signed, but the header claims HS256
        let header = TokenHeader {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        };
        let claims = TokenBuilder::issued_by(&identities.issuer_key)
            .with_scope("PROGRAMSERVICE.WRITE")
            .with_lifetime(60)
            .claims();
        let downgraded = sign_token_parts(&identities.issuer_key, &header, &claims).unwrap();

        assert!(matches!(
            verifier.decode_token(&downgraded),
            Err(AuthError::UnsupportedAlgorithm(alg)) if alg == "HS256"
        ));
    }

    #[test]
    fn it_rejects_an_unrecognized_algorithm() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        let header = TokenHeader {
            alg: "none".to_string(),
            typ: "JWT".to_string(),
        };
        let claims = TokenBuilder::issued_by(&identities.issuer_key)
            .with_lifetime(60)
            .claims();
        let unsigned = sign_token_parts(&identities.issuer_key, &header, &claims).unwrap();

        assert!(matches!(
            verifier.decode_token(&unsigned),
            Err(AuthError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn it_rejects_an_unexpected_token_type() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        let header = TokenHeader {
            alg: "RS256".to_string(),
            typ: "SAML".to_string(),
        };
        let claims = TokenBuilder::issued_by(&identities.issuer_key)
            .with_lifetime(60)
            .claims();
        let token = sign_token_parts(&identities.issuer_key, &header, &claims).unwrap();

        assert!(matches!(
            verifier.decode_token(&token),
            Err(AuthError::MalformedToken(_))
        ));
    }
}

mod fail_closed {
    use crate::{
        error::AuthError, helpers::TokenBuilder, tests::fixtures::Identities,
        verifier::TokenVerifier,
    };
    use base64::Engine;
    use serde_json::json;

    #[test]
    fn it_fails_closed_on_garbage_tokens() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        for garbage in ["", "not-a-token", "a.b", "a.b.c", "a.b.c.d"] {
            assert!(!verifier.is_valid_jwt(garbage), "{garbage:?}");
            assert!(
                verifier.permissions_from_token(garbage).is_empty(),
                "{garbage:?}"
            );
        }
    }

    #[test]
    fn it_fails_closed_without_a_usable_key() {
        let identities = Identities::new();
        let keyless = TokenVerifier::new("");

        let token = TokenBuilder::issued_by(&identities.issuer_key)
            .with_scope("PROGRAM-PACA-AU.READ")
            .with_lifetime(60)
            .sign()
            .unwrap();

        assert!(matches!(
            keyless.decode_token(&token),
            Err(AuthError::MissingVerificationKey)
        ));
        assert!(!keyless.is_valid_jwt(&token));
        assert!(keyless.permissions_from_token(&token).is_empty());
    }

    #[test]
    fn it_returns_no_permissions_for_unverifiable_tokens() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        let forged = TokenBuilder::issued_by(&identities.rogue_key)
            .with_scope("PROGRAMSERVICE.WRITE")
            .with_lifetime(60)
            .sign()
            .unwrap();

        assert!(verifier.permissions_from_token(&forged).is_empty());
    }

    #[test]
    fn it_treats_an_absent_scope_claim_as_no_permissions() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        // Claims with no context at all, signed properly
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(
            serde_json::to_vec(&json!({ "alg": "RS256", "typ": "JWT" })).unwrap(),
        );
        let claims = engine.encode(
            serde_json::to_vec(&json!({ "iat": 0, "sub": "researcher@example.com" })).unwrap(),
        );
        let signed_data = format!("{header}.{claims}");
        let signature = identities.issuer_key.sign(signed_data.as_bytes()).unwrap();
        let token = format!("{signed_data}.{}", engine.encode(signature));

        assert!(verifier.is_valid_jwt(&token));
        assert!(verifier.permissions_from_token(&token).is_empty());
    }

    #[test]
    fn it_preserves_scope_order_and_duplicates() {
        let identities = Identities::new();
        let verifier = TokenVerifier::new(identities.issuer_public_pem);

        let scopes = [
            "PROGRAM-XYZ.READ",
            "PROGRAM-ABC.WRITE",
            "PROGRAM-ABC.WRITE",
        ];
        let token = TokenBuilder::issued_by(&identities.issuer_key)
            .with_scopes(scopes)
            .with_lifetime(60)
            .sign()
            .unwrap();

        assert_eq!(verifier.permissions_from_token(&token), scopes);
    }
}
