// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store for tests and local development.

use crate::models::{User, Workout};
use dashmap::DashMap;
use std::sync::Arc;

/// Users and workouts keyed by document ID. Clones share the same maps.
#[derive(Clone, Default)]
pub struct MemoryDb {
    users: Arc<DashMap<String, User>>,
    workouts: Arc<DashMap<String, Workout>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users ordered by creation time.
    pub fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        users
    }

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|e| e.value().clone())
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|e| e.value().email == email)
            .map(|e| e.value().clone())
    }

    pub fn set_user(&self, user: &User) {
        self.users.insert(user.id.clone(), user.clone());
    }

    pub fn delete_user(&self, id: &str) {
        self.users.remove(id);
    }

    /// All workouts ordered by date.
    pub fn list_workouts(&self) -> Vec<Workout> {
        self.collect_workouts(|_| true)
    }

    pub fn list_workouts_for_user(&self, user_id: &str) -> Vec<Workout> {
        self.collect_workouts(|w| w.user_id == user_id)
    }

    fn collect_workouts(&self, keep: impl Fn(&Workout) -> bool) -> Vec<Workout> {
        let mut workouts: Vec<Workout> = self
            .workouts
            .iter()
            .filter(|e| keep(e.value()))
            .map(|e| e.value().clone())
            .collect();
        // Millisecond resolution, matching the stored string order
        workouts.sort_by(|a, b| {
            a.date_time
                .timestamp_millis()
                .cmp(&b.date_time.timestamp_millis())
                .then(a.id.cmp(&b.id))
        });
        workouts
    }

    pub fn get_workout(&self, id: &str) -> Option<Workout> {
        self.workouts.get(id).map(|e| e.value().clone())
    }

    pub fn set_workout(&self, workout: &Workout) {
        self.workouts.insert(workout.id.clone(), workout.clone());
    }

    pub fn delete_workout(&self, id: &str) {
        self.workouts.remove(id);
    }
}
