pub mod prelude {
    use crate::{
        adapters::json,
        web::{self, api, sqlite, Cfg},
    };
    use tw_application::prelude as flows;

    pub use crate::web::tests::prelude::*;

    fn test_cfg() -> Cfg {
        Cfg {
            public_url: "http://localhost:8000".into(),
            token_secret: None,
            facebook_app_secret: None,
            itinerary_ttl: flows::DEFAULT_ITINERARY_TTL,
        }
    }

    fn setup_with_cfg(cfg: Cfg) -> (Client, sqlite::Connections) {
        web::tests::setup_with_cfg(vec![("/", api::routes())], cfg)
    }

    pub fn setup() -> (Client, sqlite::Connections) {
        setup_with_cfg(test_cfg())
    }

    pub fn setup_with_facebook_secret(secret: &str) -> (Client, sqlite::Connections) {
        setup_with_cfg(Cfg {
            facebook_app_secret: Some(secret.to_string()),
            ..test_cfg()
        })
    }

    /// Logs in over the API and returns the bearer token.
    pub fn login_token(client: &Client, email: &str, pw: &str) -> String {
        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(format!("{{\"email\":\"{email}\",\"password\":\"{pw}\"}}"))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let token: json::JwtToken = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        token.token
    }

    pub fn bearer(token: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {token}"))
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }
}
