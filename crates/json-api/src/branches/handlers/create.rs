//! Create Branch Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    branches::models::{BranchResponse, CreateBranchRequest},
    extensions::*,
};

/// Create Branch Handler
#[endpoint(
    tags("branches"),
    summary = "Create Branch",
    responses(
        (status_code = StatusCode::CREATED, description = "Branch created"),
        (status_code = StatusCode::CONFLICT, description = "Another branch is already main"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid branch"),
    ),
)]
#[tracing::instrument(name = "branches.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateBranchRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BranchResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let branch = state
        .app
        .branches
        .create_branch(json.into_inner().into())
        .await
        .or_status()?;

    res.add_header(LOCATION, format!("/api/branches/{}", branch.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(branch_uuid = %branch.uuid, is_main = branch.is_main, "created branch");

    Ok(Json(branch.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use bizdesk_app::domain::{
        RegistryError,
        branches::{MockBranchesService, data::NewBranch, records::BranchUuid},
    };

    use super::{super::tests::*, *};

    fn make_service(branches: MockBranchesService) -> Service {
        branches_service(branches, Router::with_path("api/branches").post(handler))
    }

    #[tokio::test]
    async fn create_branch_defaults_to_not_main() -> TestResult {
        let uuid = BranchUuid::new();
        let mut branches = MockBranchesService::new();

        branches
            .expect_create_branch()
            .once()
            .withf(|new| {
                *new == NewBranch {
                    name: "Bandung".to_string(),
                    address: "Jl. Asia Afrika 8".to_string(),
                    phone: None,
                    is_main: false,
                }
            })
            .return_once(move |_| Ok(make_branch(uuid, false)));

        let mut res = TestClient::post("http://example.com/api/branches")
            .json(&json!({ "name": "Bandung", "address": "Jl. Asia Afrika 8" }))
            .send(&make_service(branches))
            .await;

        let body: BranchResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.id, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn second_main_branch_returns_409() {
        let mut branches = MockBranchesService::new();

        branches.expect_create_branch().once().return_once(|_| {
            Err(RegistryError::ExclusivityConflict {
                flag: "isMain",
                holder: Uuid::now_v7(),
            })
        });

        let res = TestClient::post("http://example.com/api/branches")
            .json(&json!({ "name": "Bandung", "address": "Jl. Asia Afrika 8", "isMain": true }))
            .send(&make_service(branches))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn missing_address_returns_400_before_reaching_the_registry() {
        let mut branches = MockBranchesService::new();

        branches.expect_create_branch().never();

        let res = TestClient::post("http://example.com/api/branches")
            .json(&json!({ "name": "Bandung" }))
            .send(&make_service(branches))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
