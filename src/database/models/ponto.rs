use serde::Serialize;
use sqlx::FromRow;

/// A named coordinate belonging to exactly one mapa
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ponto {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    // Owning mapa; not part of any API payload
    #[serde(skip_serializing)]
    pub mapa_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapa_id_is_not_serialized() {
        let ponto = Ponto {
            id: 1,
            name: "Praça Central".to_string(),
            latitude: -23.5505,
            longitude: -46.6333,
            mapa_id: 7,
        };

        let value = serde_json::to_value(&ponto).unwrap();
        assert!(value.get("mapa_id").is_none());
        assert_eq!(value["id"], 1);
        assert_eq!(value["latitude"], -23.5505);
    }
}
