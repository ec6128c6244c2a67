//! Database Models
//!
//! One plain row type per table. Entities are value-holders with no
//! back-references; foreign keys are carried as ids and validated by the
//! handlers before a write. Each model implements [`Entity`] so the generic
//! repository can issue its statements without knowing the concrete type.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use super::repository::Entity;

/// Platform user. The password is stored only as a bcrypt hash and is never
/// serialized back to clients.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub photo: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for User {
    const TABLE: &'static str = "users";
    const ID_COLUMN: &'static str = "user_id";

    fn id(&self) -> i32 {
        self.user_id
    }

    fn with_id(&self, id: i32) -> Self {
        Self { user_id: id, ..self.clone() }
    }

    fn insert(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "INSERT INTO users (email, password_hash, name, phone, photo, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(self.email.as_str())
        .bind(self.password_hash.as_str())
        .bind(self.name.as_str())
        .bind(self.phone.as_str())
        .bind(self.photo.as_str())
        .bind(self.created_at)
    }

    fn replace(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "UPDATE users SET email = $1, password_hash = $2, name = $3, phone = $4, \
             photo = $5, created_at = $6 WHERE user_id = $7 RETURNING *",
        )
        .bind(self.email.as_str())
        .bind(self.password_hash.as_str())
        .bind(self.name.as_str())
        .bind(self.phone.as_str())
        .bind(self.photo.as_str())
        .bind(self.created_at)
        .bind(self.user_id)
    }
}

/// Land or rooftop site a user offers for microgrid installation, with the
/// solar and wind profile surveyed for it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Space {
    pub space_id: i32,
    pub user_id: i32,
    pub address: String,
    pub name: String,
    pub photo: String,
    pub energy_source: String,
    pub solar_orientation: String,
    pub avg_solar_index: f64,
    pub topography: String,
    pub total_area: f64,
    pub wind_direction: String,
    pub wind_speed: f64,
}

impl Entity for Space {
    const TABLE: &'static str = "spaces";
    const ID_COLUMN: &'static str = "space_id";

    fn id(&self) -> i32 {
        self.space_id
    }

    fn with_id(&self, id: i32) -> Self {
        Self { space_id: id, ..self.clone() }
    }

    fn insert(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "INSERT INTO spaces (user_id, address, name, photo, energy_source, \
             solar_orientation, avg_solar_index, topography, total_area, \
             wind_direction, wind_speed) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
        .bind(self.user_id)
        .bind(self.address.as_str())
        .bind(self.name.as_str())
        .bind(self.photo.as_str())
        .bind(self.energy_source.as_str())
        .bind(self.solar_orientation.as_str())
        .bind(self.avg_solar_index)
        .bind(self.topography.as_str())
        .bind(self.total_area)
        .bind(self.wind_direction.as_str())
        .bind(self.wind_speed)
    }

    fn replace(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "UPDATE spaces SET user_id = $1, address = $2, name = $3, photo = $4, \
             energy_source = $5, solar_orientation = $6, avg_solar_index = $7, \
             topography = $8, total_area = $9, wind_direction = $10, wind_speed = $11 \
             WHERE space_id = $12 RETURNING *",
        )
        .bind(self.user_id)
        .bind(self.address.as_str())
        .bind(self.name.as_str())
        .bind(self.photo.as_str())
        .bind(self.energy_source.as_str())
        .bind(self.solar_orientation.as_str())
        .bind(self.avg_solar_index)
        .bind(self.topography.as_str())
        .bind(self.total_area)
        .bind(self.wind_direction.as_str())
        .bind(self.wind_speed)
        .bind(self.space_id)
    }
}

/// Microgrid project attached to a space, with the site requirements it needs
/// met and the crowdfunding goal it is raising towards.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Microgrid {
    pub microgrid_id: i32,
    pub user_id: i32,
    pub space_id: i32,
    pub name: String,
    pub photo: String,
    pub required_solar_radiation: f64,
    pub required_topography: String,
    pub required_area: f64,
    pub required_wind_speed: f64,
    pub energy_source: String,
    pub funding_goal: f64,
}

impl Entity for Microgrid {
    const TABLE: &'static str = "microgrids";
    const ID_COLUMN: &'static str = "microgrid_id";

    fn id(&self) -> i32 {
        self.microgrid_id
    }

    fn with_id(&self, id: i32) -> Self {
        Self { microgrid_id: id, ..self.clone() }
    }

    fn insert(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "INSERT INTO microgrids (user_id, space_id, name, photo, \
             required_solar_radiation, required_topography, required_area, \
             required_wind_speed, energy_source, funding_goal) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(self.user_id)
        .bind(self.space_id)
        .bind(self.name.as_str())
        .bind(self.photo.as_str())
        .bind(self.required_solar_radiation)
        .bind(self.required_topography.as_str())
        .bind(self.required_area)
        .bind(self.required_wind_speed)
        .bind(self.energy_source.as_str())
        .bind(self.funding_goal)
    }

    fn replace(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "UPDATE microgrids SET user_id = $1, space_id = $2, name = $3, photo = $4, \
             required_solar_radiation = $5, required_topography = $6, required_area = $7, \
             required_wind_speed = $8, energy_source = $9, funding_goal = $10 \
             WHERE microgrid_id = $11 RETURNING *",
        )
        .bind(self.user_id)
        .bind(self.space_id)
        .bind(self.name.as_str())
        .bind(self.photo.as_str())
        .bind(self.required_solar_radiation)
        .bind(self.required_topography.as_str())
        .bind(self.required_area)
        .bind(self.required_wind_speed)
        .bind(self.energy_source.as_str())
        .bind(self.funding_goal)
        .bind(self.microgrid_id)
    }
}

/// Investment proposal from a user towards a microgrid.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Investment {
    pub investment_id: i32,
    pub user_id: i32,
    pub microgrid_id: i32,
    pub proposal: String,
}

impl Entity for Investment {
    const TABLE: &'static str = "investments";
    const ID_COLUMN: &'static str = "investment_id";

    fn id(&self) -> i32 {
        self.investment_id
    }

    fn with_id(&self, id: i32) -> Self {
        Self { investment_id: id, ..self.clone() }
    }

    fn insert(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "INSERT INTO investments (user_id, microgrid_id, proposal) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(self.user_id)
        .bind(self.microgrid_id)
        .bind(self.proposal.as_str())
    }

    fn replace(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "UPDATE investments SET user_id = $1, microgrid_id = $2, proposal = $3 \
             WHERE investment_id = $4 RETURNING *",
        )
        .bind(self.user_id)
        .bind(self.microgrid_id)
        .bind(self.proposal.as_str())
        .bind(self.investment_id)
    }
}

/// Performance report recorded against a microgrid.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Report {
    pub report_id: i32,
    pub microgrid_id: i32,
    pub energy_generated: f64,
    pub panel_temperature: f64,
    pub profit: f64,
}

impl Entity for Report {
    const TABLE: &'static str = "reports";
    const ID_COLUMN: &'static str = "report_id";

    fn id(&self) -> i32 {
        self.report_id
    }

    fn with_id(&self, id: i32) -> Self {
        Self { report_id: id, ..self.clone() }
    }

    fn insert(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "INSERT INTO reports (microgrid_id, energy_generated, panel_temperature, profit) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(self.microgrid_id)
        .bind(self.energy_generated)
        .bind(self.panel_temperature)
        .bind(self.profit)
    }

    fn replace(&self) -> QueryAs<'_, Postgres, Self, PgArguments> {
        sqlx::query_as(
            "UPDATE reports SET microgrid_id = $1, energy_generated = $2, \
             panel_temperature = $3, profit = $4 WHERE report_id = $5 RETURNING *",
        )
        .bind(self.microgrid_id)
        .bind(self.energy_generated)
        .bind(self.panel_temperature)
        .bind(self.profit)
        .bind(self.report_id)
    }
}
