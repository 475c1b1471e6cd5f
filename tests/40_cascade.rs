mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn deleting_a_mapa_cascades_to_its_pontos() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/mapas", server.base_url))
        .json(&json!({ "name": "Cascata" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let mapa = res.json::<Value>().await?;
    let mapa_id = mapa["id"].as_i64().unwrap();

    for (name, lat, lon) in [("Um", 1.0, 1.0), ("Dois", 2.0, 2.0), ("Três", 3.0, 3.0)] {
        let res = client
            .post(format!("{}/api/mapas/{}/pontos", server.base_url, mapa_id))
            .json(&json!({ "name": name, "latitude": lat, "longitude": lon }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // The list projection sees all three
    let res = client.get(format!("{}/api/mapas", server.base_url)).send().await?;
    let mapas = res.json::<Vec<Value>>().await?;
    let entry = mapas
        .iter()
        .find(|m| m["id"] == mapa_id)
        .expect("mapa missing from list");
    assert_eq!(entry["point_count"], 3);

    let res = client
        .delete(format!("{}/api/mapas/{}", server.base_url, mapa_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // The mapa is gone from the listing
    let res = client.get(format!("{}/api/mapas", server.base_url)).send().await?;
    let mapas = res.json::<Vec<Value>>().await?;
    assert!(mapas.iter().all(|m| m["id"] != mapa_id), "mapa survived delete");

    // And no orphaned pontos remain under its id
    let res = client
        .get(format!("{}/api/mapas/{}/pontos", server.base_url, mapa_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let pontos = res.json::<Vec<Value>>().await?;
    assert!(pontos.is_empty(), "orphaned pontos: {:?}", pontos);
    Ok(())
}

#[tokio::test]
async fn bulk_ponto_delete_leaves_the_mapa_alone() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/mapas", server.base_url))
        .json(&json!({ "name": "Sobrevivente" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let mapa_id = res.json::<Value>().await?["id"].as_i64().unwrap();

    let res = client
        .post(format!("{}/api/mapas/{}/pontos", server.base_url, mapa_id))
        .json(&json!({ "name": "Único", "latitude": 5.0, "longitude": 6.0 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .delete(format!("{}/api/mapas/{}/pontos", server.base_url, mapa_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(format!("{}/api/mapas", server.base_url)).send().await?;
    let mapas = res.json::<Vec<Value>>().await?;
    let entry = mapas
        .iter()
        .find(|m| m["id"] == mapa_id)
        .expect("mapa was deleted by the bulk ponto delete");
    assert_eq!(entry["point_count"], 0);
    Ok(())
}
