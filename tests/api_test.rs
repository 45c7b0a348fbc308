use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;
use verifydip::{AppState, build_router, config::Config};

const BOUNDARY: &str = "verifydip-test-boundary";

struct TestApp {
    router: Router,
    _upload_dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let upload_dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.upload.dir = upload_dir.path().to_path_buf();
        config.upload.max_file_size = 1024;

        Self {
            router: build_router(AppState::in_memory(config)),
            _upload_dir: upload_dir,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn upload(
        &self,
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> (StatusCode, Value) {
        let mut body = Vec::new();
        for (name, value) in fields {
            let part = format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"\r\n\r\n\
                 {value}\r\n"
            );
            body.extend_from_slice(part.as_bytes());
        }
        if let Some((mime, contents)) = file {
            let head = format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"file\"; filename=\"pattern.png\"\r\n\
                 Content-Type: {mime}\r\n\r\n"
            );
            body.extend_from_slice(head.as_bytes());
            body.extend_from_slice(contents);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        self.send(
            Request::post("/api/ip-assets")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    async fn create_user(&self, wallet: &str) -> Value {
        let (status, user) = self
            .json("POST", "/api/users", json!({ "walletAddress": wallet, "username": "" }))
            .await;
        assert_eq!(status, StatusCode::OK);
        user
    }

    async fn create_asset(&self, user_id: i64, title: &str) -> Value {
        let user_id = user_id.to_string();
        let (status, asset) = self
            .upload(
                &[
                    ("userId", &user_id),
                    ("title", title),
                    ("assetType", "design"),
                    ("culturalOrigin", "Batak"),
                ],
                Some(("image/png", b"\x89PNG fake")),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{asset}");
        asset
    }
}

#[tokio::test]
async fn creating_a_user_twice_returns_the_same_record() {
    let app = TestApp::new();

    let first = app.create_user("0xAAA").await;
    let second = app.create_user("0xAAA").await;

    assert_eq!(first["id"], 1);
    assert_eq!(first, second);
    assert_eq!(first["username"], Value::Null);

    let (status, found) = app.get("/api/users/wallet/0xAAA").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["walletAddress"], "0xAAA");

    let (status, body) = app.get("/api/users/wallet/0xBBB").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn user_without_wallet_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.json("POST", "/api/users", json!({ "username": "ana" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user data");
    assert!(body["errors"].is_array());
}

#[tokio::test]
async fn uploads_an_ip_asset() {
    let app = TestApp::new();
    let user = app.create_user("0xAAA").await;

    let asset = app.create_asset(user["id"].as_i64().unwrap(), "Ulos").await;

    assert_eq!(asset["id"], 1);
    assert_eq!(asset["userId"], 1);
    assert_eq!(asset["status"], "pending");
    assert_eq!(asset["royaltyRate"], "5.00");
    assert_eq!(asset["fileSize"], 9);
    assert!(asset["ipId"].as_str().unwrap().starts_with("ip_1_"));

    let (status, listed) = app.get("/api/ip-assets/user/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, fetched) = app.get("/api/ip-assets/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, asset);
}

#[tokio::test]
async fn upload_validation() {
    let app = TestApp::new();

    let (status, body) = app.upload(&[("userId", "1"), ("title", "x")], None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "File is required");

    let (status, body) = app
        .upload(&[("title", "x"), ("assetType", "song")], Some(("audio/mpeg", b"id3")))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User ID is required");

    let (status, _) = app
        .upload(&[("userId", "1")], Some(("application/pdf", b"%PDF")))
        .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let (status, _) = app
        .upload(&[("userId", "1")], Some(("image/png", &[0u8; 2048])))
        .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

    let (status, body) = app
        .upload(
            &[("userId", "1"), ("title", "x"), ("assetType", "video")],
            Some(("image/png", b"png")),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid IP asset data");
}

#[tokio::test]
async fn patches_an_ip_asset() {
    let app = TestApp::new();
    let asset = app.create_asset(1, "Kawung").await;

    let (status, updated) = app
        .json("PATCH", "/api/ip-assets/1", json!({ "status": "registered", "title": "Kawung II" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "registered");
    assert_eq!(updated["title"], "Kawung II");
    assert_eq!(updated["ipId"], asset["ipId"]);
    assert_eq!(updated["createdAt"], asset["createdAt"]);

    let (status, _) = app
        .json("PATCH", "/api/ip-assets/1", json!({ "ipId": "forged" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .json("PATCH", "/api/ip-assets/99", json!({ "title": "missing" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn verifies_by_ip_id() {
    let app = TestApp::new();
    app.create_user("0xAAA").await;
    let asset = app.create_asset(1, "Songket").await;
    let ip_id = asset["ipId"].as_str().unwrap();

    let (status, _) = app
        .json(
            "POST",
            "/api/derivatives",
            json!({ "parentIpId": ip_id, "childIpId": "0xchild", "licenseTermsId": "1" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&format!("/api/verify/{ip_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verified"], true);
    assert_eq!(body["owner"]["walletAddress"], "0xAAA");
    assert_eq!(body["derivatives"], 1);

    let (status, body) = app.get("/api/verify/ip_404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["verified"], false);
    assert_eq!(body["message"], "IP asset not found");
}

#[tokio::test]
async fn royalty_totals_follow_claims() {
    let app = TestApp::new();
    app.create_user("0xAAA").await;
    app.create_asset(1, "Tenun").await;

    for amount in ["4.50", "1.50"] {
        let (status, payment) = app
            .json(
                "POST",
                "/api/royalties",
                json!({ "ipAssetId": 1, "amount": amount, "claimerAddress": "0xAAA" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payment["status"], "pending");
        assert_eq!(payment["currency"], "WIP");
    }

    let (status, claimed) = app
        .json("PATCH", "/api/royalties/1/claim", json!({ "txHash": "0xabc" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(claimed["status"], "claimed");
    assert_eq!(claimed["txHash"], "0xabc");

    let (_, summary) = app.get("/api/royalties/user/1").await;
    assert_eq!(summary["payments"].as_array().unwrap().len(), 2);
    assert_eq!(summary["totalEarned"], 4.5);
    assert_eq!(summary["availableToClaim"], 1.5);

    let (status, _) = app.json("PATCH", "/api/royalties/9/claim", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .json(
            "POST",
            "/api/royalties",
            json!({ "amount": "lots", "claimerAddress": "0xAAA" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn story_registration_keeps_local_ip_id() {
    let app = TestApp::new();
    let asset = app.create_asset(1, "Batik").await;

    let (status, body) = app
        .json("POST", "/api/story/register-ip", json!({ "ipAssetId": "1" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["ipId"].as_str().unwrap().len(), 42);
    let tx_hash = body["txHash"].as_str().unwrap().to_string();

    let (_, stored) = app.get("/api/ip-assets/1").await;
    assert_eq!(stored["status"], "registered");
    assert_eq!(stored["registrationTxHash"], tx_hash);
    assert_eq!(stored["ipId"], asset["ipId"]);

    let (status, _) = app
        .json("POST", "/api/story/register-ip", json!({ "ipAssetId": 7 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, claim) = app
        .json(
            "POST",
            "/api/story/claim-revenue",
            json!({ "ancestorIpId": "0xparent", "claimer": "0xAAA" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(claim["currency"], "WIP");
}

#[tokio::test]
async fn idgt_rewards_and_royalties() {
    let app = TestApp::new();
    app.create_user("0xOwner").await;
    let asset = app.create_asset(1, "Gorga").await;
    let ip_id = asset["ipId"].as_str().unwrap();

    let (status, body) = app
        .json(
            "POST",
            "/api/idgt/register-ip",
            json!({ "ipAssetId": 1, "ownerAddress": "0xOwner", "ipId": ip_id }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokensAwarded"], "100 IDGT");

    let (_, stored) = app.get("/api/ip-assets/1").await;
    assert_eq!(stored["idgtRegistered"], true);
    assert_eq!(stored["idgtTransactionHash"], body["transactionHash"]);

    let (status, body) = app
        .json(
            "POST",
            "/api/idgt/pay-royalty",
            json!({ "ipId": ip_id, "amount": "2500000000000000000", "payerAddress": "0xPayer" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amountPaid"], "2.50 IDGT");

    let (_, info) = app.get("/api/idgt/user/0xowner").await;
    assert_eq!(info["balanceFormatted"], "102.50 IDGT");
    assert_eq!(info["royaltiesFormatted"], "2.50 IDGT");

    let (status, body) = app
        .json("POST", "/api/idgt/pay-usage-fee", json!({ "ipId": ip_id, "ethAmount": "1000" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");

    let (_, stats) = app.get("/api/idgt/stats").await;
    assert_eq!(stats["totalIPsRegistered"], 127);
}

#[tokio::test]
async fn idgt_usage_fee_credits_the_owner() {
    let app = TestApp::new();
    app.create_user("0xOwner").await;
    let asset = app.create_asset(1, "Sasirangan").await;
    let ip_id = asset["ipId"].as_str().unwrap();

    let (status, body) = app
        .json(
            "POST",
            "/api/idgt/pay-usage-fee",
            json!({
                "ipId": ip_id,
                "ethAmount": "1000000000000000000",
                "userAddress": "0xUser"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["feeAmount"],
        "50000000000000000.000000 ETH converted to IDGT"
    );

    let (_, info) = app.get("/api/idgt/user/0xOwner").await;
    assert_eq!(info["royaltiesFormatted"], "0.05 IDGT");

    let (status, body) = app
        .json(
            "POST",
            "/api/idgt/pay-usage-fee",
            json!({ "ipId": ip_id, "ethAmount": "0.5", "userAddress": "0xUser" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "ethAmount must be a whole number");
}

#[tokio::test]
async fn idgt_royalty_accepts_exponent_numbers() {
    let app = TestApp::new();
    app.create_user("0xOwner").await;
    let asset = app.create_asset(1, "Tapis").await;
    let ip_id = asset["ipId"].as_str().unwrap();

    let (status, body) = app
        .json(
            "POST",
            "/api/idgt/pay-royalty",
            json!({ "ipId": ip_id, "amount": 2.5e18, "payerAddress": "0xPayer" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amountPaid"], "2.50 IDGT");

    let (_, info) = app.get("/api/idgt/user/0xowner").await;
    assert_eq!(info["royaltiesFormatted"], "2.50 IDGT");
}

#[tokio::test]
async fn defi_borrow_respects_ltv() {
    let app = TestApp::new();

    let (status, body) = app
        .json(
            "POST",
            "/api/defi/borrow",
            json!({ "collateralAmount": "5", "borrowAmount": "400", "userAddress": "0xAAA" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stablecoinMinted"], "400");
    assert_eq!(body["healthFactor"], 118.75);

    let (status, body) = app
        .json(
            "POST",
            "/api/defi/borrow",
            json!({ "collateralAmount": 5, "borrowAmount": 451, "userAddress": "0xAAA" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Borrow amount exceeds 90% LTV. Max borrowable: 450.00 IPUSD"
    );
}

#[tokio::test]
async fn defi_positions_and_actions() {
    let app = TestApp::new();

    let (status, body) = app
        .json("POST", "/api/defi/stake", json!({ "amount": "250", "userAddress": "0xAAA" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lstMinted"], "250");

    let (status, body) = app.json("POST", "/api/defi/unstake", json!({ "amount": "10" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Amount and user address required");

    let (status, body) = app
        .json("POST", "/api/defi/unstake", json!({ "amount": "10", "userAddress": "0xAAA" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Unstake request for 10 LST submitted. Unlock in 7 days."
    );

    let (_, body) = app
        .json("POST", "/api/defi/repay", json!({ "amount": "100", "userAddress": "0xAAA" }))
        .await;
    assert_eq!(body["principalPaid"], "97.00");
    assert_eq!(body["interestPaid"], "3.00");

    let (status, body) = app
        .json(
            "POST",
            "/api/defi/register-ip",
            json!({ "culturalOrigin": "Batak", "patternName": "Ulos", "ownerAddress": "0xAAA" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token_id = body["tokenId"].as_u64().unwrap();
    assert!((1..=10_000).contains(&token_id));
    assert_eq!(body["metadata"]["patternName"], "Ulos");

    let (_, staking) = app.get("/api/defi/staking/0xAAA").await;
    assert_eq!(staking["exchangeRate"], "1.05");
    let (_, loan) = app.get("/api/defi/loan/0xAAA").await;
    assert_eq!(loan["healthFactor"], 125);
    let (_, registry) = app.get("/api/defi/ip-registry/0xAAA").await;
    assert_eq!(registry["ownedTokens"].as_array().unwrap().len(), 2);
    let (_, stats) = app.get("/api/defi/stats").await;
    assert_eq!(stats["activeBorrowers"], 1234);
}
