use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Product card data served by `GET /api/products/new`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Products shown while the real list is loading or failed to load
    pub fn fallback() -> Vec<Product> {
        vec![
            Product {
                id: "1".into(),
                name: "Minimalist Hoodie".into(),
                price: 89.99,
                description: "Urban style meets comfort with our premium cotton blend hoodie."
                    .into(),
                images: vec!["https://i.ibb.co/bBsr0tH/DSC07648.png".into()],
            },
            Product {
                id: "2".into(),
                name: "Signature Tee".into(),
                price: 49.99,
                description: "Our bestselling signature t-shirt with subtle logo detailing."
                    .into(),
                images: vec!["https://i.ibb.co/hWt5Ssc/DSC07653.png".into()],
            },
            Product {
                id: "3".into(),
                name: "Urban Jacket".into(),
                price: 129.99,
                description: "Weather-resistant jacket designed for city living and beyond."
                    .into(),
                images: vec!["https://i.ibb.co/dDN5B2s/DSC07656.png".into()],
            },
        ]
    }
}

impl AggregateRoot for Product {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

/// First `count` products of the fetched list, or of the fallback list when
/// nothing usable was fetched
pub fn featured(fetched: Option<&[Product]>, count: usize) -> Vec<Product> {
    match fetched {
        Some(items) => items.iter().take(count).cloned().collect(),
        None => Product::fallback().into_iter().take(count).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_new_products() {
        let items: Vec<Product> = serde_json::from_str(
            r#"[{"_id": "a1", "name": "Cargo Pants", "price": 75, "description": "Loose fit", "images": ["x.png", "y.png"]}]"#,
        )
        .unwrap();
        assert_eq!(items[0].id, "a1");
        assert_eq!(items[0].primary_image(), Some("x.png"));
    }

    #[test]
    fn test_featured_takes_first_items() {
        let mut items = Product::fallback();
        items.extend(Product::fallback());
        assert_eq!(featured(Some(&items), 3).len(), 3);
        assert_eq!(featured(Some(&items[..1]), 3).len(), 1);
    }

    #[test]
    fn test_featured_falls_back() {
        let shown = featured(None, 3);
        assert_eq!(shown, Product::fallback());
    }
}
