use chrono::NaiveDate;
use juniper::{graphql_object, GraphQLEnum, GraphQLObject};
use serde::{Deserialize, Serialize};

/// One day's menu as published on the bistro page.
#[derive(Debug, Clone, PartialEq, Eq, GraphQLObject, Serialize, Deserialize)]
pub struct Menu {
    pub date: NaiveDate,
    pub categories: Vec<MealCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, GraphQLObject, Serialize, Deserialize)]
pub struct MealCategory {
    pub name: CategoryKind,
    pub meals: Vec<Meal>,
}

impl MealCategory {
    #[must_use]
    pub const fn new(name: CategoryKind) -> Self {
        Self {
            name,
            meals: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, GraphQLEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Soup,
    Daily,
    Salad,
    Burger,
    Special,
    Pasta,
    Steak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    /// grams
    pub weight: Option<u32>,
    /// whole crowns
    pub base_price: Option<u32>,
}

// GraphQL only knows 32 bit signed ints; both values are at most four digits
#[graphql_object]
impl Meal {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> Option<i32> {
        self.weight.and_then(|w| i32::try_from(w).ok())
    }

    pub fn base_price(&self) -> Option<i32> {
        self.base_price.and_then(|p| i32::try_from(p).ok())
    }
}

#[cfg(test)]
mod tests {
    use juniper::{EmptyMutation, EmptySubscription, RootNode};
    use serde_json::json;

    use super::*;

    fn sample() -> Menu {
        Menu {
            date: NaiveDate::from_ymd_opt(2018, 3, 16).unwrap(),
            categories: vec![
                MealCategory {
                    name: CategoryKind::Soup,
                    meals: vec![Meal {
                        name: "Kuřecí vývar s nudlemi".into(),
                        weight: None,
                        base_price: None,
                    }],
                },
                MealCategory {
                    name: CategoryKind::Daily,
                    meals: vec![Meal {
                        name: "Svíčková na smetaně".into(),
                        weight: Some(150),
                        base_price: Some(139),
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2018-03-16",
                "categories": [
                    {
                        "name": "soup",
                        "meals": [
                            { "name": "Kuřecí vývar s nudlemi", "weight": null, "basePrice": null }
                        ]
                    },
                    {
                        "name": "daily",
                        "meals": [
                            { "name": "Svíčková na smetaně", "weight": 150, "basePrice": 139 }
                        ]
                    }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_schema() {
        let schema = RootNode::new(
            sample(),
            EmptyMutation::<()>::new(),
            EmptySubscription::<()>::new(),
        );
        let query = r"
            {
                categories {
                    name
                    meals {
                        name
                        weight
                        basePrice
                    }
                }
            }
        ";
        let binding = juniper::Variables::default();
        let res = juniper::execute(query, None, &schema, &binding, &())
            .await
            .unwrap()
            .0;
        assert_eq!(
            serde_json::to_value(res).expect("json should be valid"),
            json!({
                "categories": [
                    {
                        "name": "SOUP",
                        "meals": [
                            { "name": "Kuřecí vývar s nudlemi", "weight": null, "basePrice": null }
                        ]
                    },
                    {
                        "name": "DAILY",
                        "meals": [
                            { "name": "Svíčková na smetaně", "weight": 150, "basePrice": 139 }
                        ]
                    }
                ]
            })
        );
    }
}
