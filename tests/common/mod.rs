//! Shared fixtures for integration tests

#![allow(dead_code)]

use payrex::{Client, ClientConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_KEY: &str = "sk_test_abc";

/// `Basic base64("sk_test_abc:")`
pub const AUTHORIZATION: &str = "Basic c2tfdGVzdF9hYmM6";

pub fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::builder()
        .api_key(API_KEY)
        .base_url(server.uri())
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

pub fn customer_json(id: &str) -> Value {
    json!({
        "id": id,
        "resource": "customer",
        "livemode": false,
        "created_at": 1700000000,
        "updated_at": 1700000000,
        "currency": "PHP",
        "email": "juan@example.com",
        "name": "Juan dela Cruz",
        "billing_statement_prefix": null,
        "next_billing_statement_sequence_number": null,
        "metadata": {"tier": "gold"}
    })
}

pub fn payment_intent_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "resource": "payment_intent",
        "livemode": false,
        "created_at": 1700000000,
        "updated_at": 1700000000,
        "amount": 10000,
        "amount_received": 0,
        "amount_capturable": 0,
        "client_secret": format!("{id}_secret"),
        "currency": "PHP",
        "description": null,
        "metadata": null,
        "payment_method_id": null,
        "payment_methods": ["card", "gcash"],
        "payment_method_options": null,
        "statement_descriptor": null,
        "status": status,
        "next_action": null,
        "return_url": null
    })
}

pub fn refund_json(id: &str) -> Value {
    json!({
        "id": id,
        "resource": "refund",
        "livemode": false,
        "created_at": 1700000000,
        "updated_at": 1700000000,
        "amount": 2500,
        "currency": "PHP",
        "status": "pending",
        "description": null,
        "reason": "requested_by_customer",
        "remarks": null,
        "payment_id": "pay_123",
        "metadata": null
    })
}

pub fn error_json(code: &str, parameter: &str) -> Value {
    json!({
        "errors": [
            {"code": code, "detail": "The request was rejected.", "parameter": parameter}
        ]
    })
}

pub fn billing_statement_json(id: &str) -> Value {
    json!({
        "id": id,
        "resource": "billing_statement",
        "livemode": false,
        "created_at": 1700000000,
        "updated_at": 1700000100,
        "status": "paid",
        "amount": 12000,
        "currency": "PHP",
        "line_items": [{
            "id": "bstm_li_1",
            "billing_statement_id": id,
            "description": "Web hosting, November",
            "unit_price": 6000,
            "quantity": 2
        }],
        "payment_intent": payment_intent_json("pi_9", "succeeded"),
        "billing_details_collection": "always",
        "customer_id": "cus_1",
        "description": "Monthly hosting",
        "billing_statement_merchant_name": "Dino Shop",
        "billing_statement_merchant_number": "09171234567",
        "billing_statement_url": "https://bill.payrexhq.com/b/bstm_1",
        "statement_descriptor": "DINOSHOP",
        "payment_settings": {"payment_methods": ["card", "gcash"]},
        "metadata": {"invoice": "2023-11"}
    })
}

pub fn checkout_session_json(id: &str) -> Value {
    json!({
        "id": id,
        "resource": "checkout_session",
        "livemode": false,
        "created_at": 1700000000,
        "updated_at": 1700086400,
        "url": format!("https://checkout.payrexhq.com/c/{id}"),
        "billing_details_collection": "always",
        "customer_reference_id": "order_1234",
        "client_secret": format!("{id}_secret"),
        "status": "expired",
        "currency": "PHP",
        "line_items": [{
            "id": "cs_li_1",
            "name": "Dino plush",
            "amount": 50000,
            "quantity": 2,
            "description": null,
            "image": null
        }],
        "payment_intent": null,
        "metadata": null,
        "success_url": "https://shop.test/ok",
        "cancel_url": "https://shop.test/cancel",
        "payment_methods": ["card", "maya"],
        "description": null,
        "submit_type": "pay",
        "expires_at": 1700086400
    })
}
