use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub uid: String,
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
    pub homeworld: Option<String>,
}

impl From<entity::person::Model> for PersonDto {
    fn from(person: entity::person::Model) -> Self {
        Self {
            id: person.id,
            uid: person.uid,
            name: person.name,
            birth_year: person.birth_year,
            eye_color: person.eye_color,
            gender: person.gender,
            hair_color: person.hair_color,
            height: person.height,
            mass: person.mass,
            skin_color: person.skin_color,
            homeworld: person.homeworld,
        }
    }
}

/// Public view of a planet. The persisted `created`/`edited` record
/// timestamps are not part of the API shape.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub uid: String,
    pub name: String,
    pub climate: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
    pub orbital_period: Option<String>,
    pub population: Option<String>,
    pub rotation_period: Option<String>,
    pub surface_water: Option<String>,
    pub terrain: Option<String>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            uid: planet.uid,
            name: planet.name,
            climate: planet.climate,
            diameter: planet.diameter,
            gravity: planet.gravity,
            orbital_period: planet.orbital_period,
            population: planet.population,
            rotation_period: planet.rotation_period,
            surface_water: planet.surface_water,
            terrain: planet.terrain,
        }
    }
}
