//! App Router

use salvo::Router;

use crate::{
    accounts, branches, categories, currencies, discounts, products, settings, taxes, units, users,
};

pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("settings/general")
                .get(settings::get::handler)
                .put(settings::update::handler),
        )
        .push(Router::with_path("auth/login").post(users::login::handler))
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .post(users::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(users::get::handler)
                        .put(users::update::handler)
                        .delete(users::delete::handler),
                ),
        )
        .push(
            Router::with_path("branches")
                .get(branches::index::handler)
                .post(branches::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(branches::get::handler)
                        .put(branches::update::handler)
                        .delete(branches::delete::handler),
                ),
        )
        .push(
            Router::with_path("currencies")
                .get(currencies::index::handler)
                .post(currencies::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(currencies::get::handler)
                        .put(currencies::update::handler)
                        .delete(currencies::delete::handler),
                ),
        )
        .push(
            Router::with_path("taxes")
                .get(taxes::index::handler)
                .post(taxes::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(taxes::get::handler)
                        .put(taxes::update::handler)
                        .delete(taxes::delete::handler),
                ),
        )
        .push(
            Router::with_path("discounts")
                .get(discounts::index::handler)
                .post(discounts::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(discounts::get::handler)
                        .put(discounts::update::handler)
                        .delete(discounts::delete::handler),
                ),
        )
        .push(
            Router::with_path("units")
                .get(units::index::handler)
                .post(units::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(units::get::handler)
                        .put(units::update::handler)
                        .delete(units::delete::handler),
                ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .post(categories::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(categories::get::handler)
                        .put(categories::update::handler)
                        .delete(categories::delete::handler),
                ),
        )
        .push(
            Router::with_path("accounts")
                .get(accounts::index::handler)
                .post(accounts::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(accounts::get::handler)
                        .put(accounts::update::handler)
                        .delete(accounts::delete::handler),
                ),
        )
        .push(Router::with_path("products").get(products::index::handler))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use bizdesk_app::context::AppContext;

    use crate::{products::UnconfiguredProductsRepository, state::State};

    use super::*;

    async fn seeded_service() -> Result<Service, bizdesk_app::domain::RegistryError> {
        let state = State::new(
            AppContext::seeded().await?,
            Arc::new(UnconfiguredProductsRepository),
        );

        Ok(Service::new(
            Router::new().hoop(inject(Arc::new(state))).push(app_router()),
        ))
    }

    #[tokio::test]
    async fn seeded_registry_is_served_under_api() -> TestResult {
        let service = seeded_service().await?;

        let taxes: serde_json::Value = TestClient::get("http://example.com/api/taxes")
            .send(&service)
            .await
            .take_json()
            .await?;

        let defaults = taxes
            .as_array()
            .ok_or("expected a list of taxes")?
            .iter()
            .filter(|tax| tax["isDefault"] == true)
            .count();

        assert_eq!(defaults, 1, "exactly one default tax after seeding");

        Ok(())
    }

    #[tokio::test]
    async fn second_main_branch_conflicts_over_http() -> TestResult {
        let service = seeded_service().await?;

        let res = TestClient::post("http://example.com/api/branches")
            .json(&serde_json::json!({
                "name": "Cabang Bandung",
                "address": "Jl. Asia Afrika 8",
                "isMain": true,
            }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn seeded_admin_logs_in_over_http() -> TestResult {
        let service = seeded_service().await?;

        let user: serde_json::Value = TestClient::post("http://example.com/api/auth/login")
            .json(&serde_json::json!({ "username": "admin", "password": "admin123" }))
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(user["role"], "admin");
        assert!(user.get("password").is_none(), "credential must never be returned");

        Ok(())
    }

    #[tokio::test]
    async fn products_fall_back_without_a_database() -> TestResult {
        let service = seeded_service().await?;

        let products: serde_json::Value = TestClient::get("http://example.com/api/products")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(products.as_array().map(Vec::len), Some(2));

        Ok(())
    }
}
