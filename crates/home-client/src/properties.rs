use home_types::{Property, PropertyId, PropertySummary};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /properties`
    pub async fn list_properties(&self) -> Result<Vec<PropertySummary>, ClientError> {
        self.send_json(self.get("properties")).await
    }

    /// `GET /properties/{id}`
    pub async fn get_property(&self, id: PropertyId) -> Result<Property, ClientError> {
        self.send_json(self.get(&format!("properties/{id}"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn lists_properties_without_auth() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/properties");
            then.status(200).json_body(json!([
                {"id": 1, "title": "T2 Bastille", "location": "Paris", "price": 410000, "surface": 48, "images": ["1.jpg"]},
                {"id": 2, "title": "Maison", "location": "Nantes", "price": 320000, "surface": 110, "images": []}
            ]));
        });

        let client = ApiClient::new(&format!("{}/api", server.base_url()), None).unwrap();
        let properties = client.list_properties().await.unwrap();

        mock.assert();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].cover_image(), Some("1.jpg"));
        assert_eq!(properties[1].id, PropertyId(2));
    }

    #[tokio::test]
    async fn fetches_single_property() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/properties/7");
            then.status(200).json_body(json!({
                "id": 7, "title": "Duplex", "description": "Top floor",
                "location": "Bordeaux", "price": 615000, "surface": 96,
                "bedrooms": 3, "floor": 5, "type": "apartment",
                "constructionYear": null, "hasElevator": true, "hasCellar": true,
                "images": ["a.jpg"]
            }));
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let property = client.get_property(PropertyId(7)).await.unwrap();

        assert_eq!(property.floor, Some(5));
        assert_eq!(property.construction_year, None);
        assert!(property.has_cellar);
    }

    #[tokio::test]
    async fn missing_property_is_a_status_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/properties/404");
            then.status(404)
                .json_body(json!({"statusCode": 404, "message": "Property not found"}));
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let err = client.get_property(PropertyId(404)).await.unwrap_err();

        assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
        assert_eq!(err.user_message(), "Property not found");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/properties");
            then.status(200).body("not json");
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let err = client.list_properties().await.unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }
}
