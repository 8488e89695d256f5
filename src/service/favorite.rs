use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    data::{
        favorite::FavoriteRepository, person::PersonRepository, planet::PlanetRepository,
    },
    error::{api::ApiError, Error},
    model::favorite::{FavoriteDto, FavoriteTarget},
};

/// Rules engine for the user-favorites join table.
///
/// Enforces at most one favorite per (user, target) pair and requires the
/// target to exist before linking. Failures are local precondition
/// violations surfaced directly as API errors; there are no retries.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Link a target to the user's favorites.
    ///
    /// Runs as a single transaction: the target existence check, the
    /// duplicate check, and the insert either all take effect or none do.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)`: The created favorite row
    /// - `Err(Error::ApiError(ApiError::PersonNotFound | PlanetNotFound))`:
    ///   The target does not exist
    /// - `Err(Error::ApiError(ApiError::PersonAlreadyFavorited | PlanetAlreadyFavorited))`:
    ///   The user already favorited this target; also returned when a
    ///   concurrent request wins the race and the unique index rejects the
    ///   insert
    /// - `Err(Error::DbErr(_))`: Database failure
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteDto, Error> {
        let txn = self.db.begin().await?;

        match target {
            FavoriteTarget::Person(person_id) => {
                if PersonRepository::new(&txn).get(person_id).await?.is_none() {
                    return Err(ApiError::PersonNotFound(person_id).into());
                }
            }
            FavoriteTarget::Planet(planet_id) => {
                if PlanetRepository::new(&txn).get(planet_id).await?.is_none() {
                    return Err(ApiError::PlanetNotFound(planet_id).into());
                }
            }
        }

        let favorite_repo = FavoriteRepository::new(&txn);

        // Fast path for a clear error message; the unique index remains the
        // authoritative duplicate guard.
        if favorite_repo
            .get_by_user_and_target(user_id, target)
            .await?
            .is_some()
        {
            return Err(already_favorited(target).into());
        }

        let favorite = match favorite_repo.create(user_id, target).await {
            Ok(favorite) => favorite,
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    return Err(already_favorited(target).into());
                }
                _ => return Err(err.into()),
            },
        };

        txn.commit().await?;

        Ok(FavoriteDto::from(favorite))
    }

    /// Unlink a target from the user's favorites.
    ///
    /// A single conditional delete; removing a favorite that does not exist
    /// is an error, so delete is deliberately not idempotent.
    ///
    /// # Returns
    /// - `Ok(())`: The favorite row was deleted
    /// - `Err(Error::ApiError(ApiError::FavoriteNotFound))`: No matching row
    /// - `Err(Error::DbErr(_))`: Database failure
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<(), Error> {
        let result = FavoriteRepository::new(self.db)
            .delete_by_user_and_target(user_id, target)
            .await?;

        if result.rows_affected == 0 {
            return Err(ApiError::FavoriteNotFound.into());
        }

        Ok(())
    }

    /// All favorite rows for the user, in insertion order.
    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }
}

fn already_favorited(target: FavoriteTarget) -> ApiError {
    match target {
        FavoriteTarget::Person(person_id) => ApiError::PersonAlreadyFavorited(person_id),
        FavoriteTarget::Planet(planet_id) => ApiError::PlanetAlreadyFavorited(planet_id),
    }
}
