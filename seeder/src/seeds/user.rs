use crate::seed::Seeder;
use db::models::user::Model;
use fake::{
    Fake,
    faker::{
        internet::en::SafeEmail,
        name::en::{FirstName, LastName},
    },
};
use sea_orm::{DatabaseConnection, DbErr};

pub struct UserSeeder;

pub const OWNER_EMAIL: &str = "owner@example.com";
pub const CARD_HOLDERS: [(&str, &str, &str, &str); 3] = [
    ("Ada", "Lovelace", "ada@example.com", "CARD001"),
    ("Alan", "Turing", "alan@example.com", "CARD002"),
    ("Grace", "Hopper", "grace@example.com", "CARD003"),
];

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Fixed event owner, no card
        if Model::find_by_email(db, OWNER_EMAIL).await?.is_none() {
            Model::create(db, "Olive", "Owner", OWNER_EMAIL, "password123", None).await?;
        }

        // Fixed card holders for kiosk demos
        for (fname, lname, email, card) in CARD_HOLDERS {
            if Model::find_by_email(db, email).await?.is_none() {
                Model::create(db, fname, lname, email, "password123", Some(card)).await?;
            }
        }

        // Random users without cards
        for _ in 0..5 {
            let fname: String = FirstName().fake();
            let lname: String = LastName().fake();
            let email = format!("{}{}", fastrand::u32(..100_000), SafeEmail().fake::<String>());
            let _ = Model::create(db, &fname, &lname, &email, "password123", None).await;
        }

        Ok(())
    }
}
