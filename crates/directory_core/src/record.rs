use serde::{Deserialize, Serialize};

pub type UserId = u64;

/// One entry of the remote user collection. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub address: Address,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

impl User {
    /// First whitespace-separated word of the name, used as the detail title.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

impl Address {
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.zipcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_endpoint_payload_ignoring_extra_fields() {
        let raw = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
        }"#;

        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.first_name(), "Leanne");
        assert_eq!(user.company.name, "Romaguera-Crona");
        assert_eq!(
            user.address.one_line(),
            "Kulas Light, Gwenborough, 92998-3874"
        );
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let raw = r#"{ "id": 2, "name": "No Email" }"#;
        assert!(serde_json::from_str::<User>(raw).is_err());
    }
}
