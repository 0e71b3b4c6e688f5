//! EcoFriends leaderboard (static data)

use crate::model::User;

/// Display name that marks the current user's row
pub const CURRENT_USER_NAME: &str = "You";

/// A ranked leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedUser {
    /// 1-indexed
    pub rank: usize,
    pub user: User,
    pub is_current_user: bool,
}

impl RankedUser {
    /// Medal for the podium places
    pub fn medal(&self) -> Option<&'static str> {
        match self.rank {
            1 => Some("🥇"),
            2 => Some("🥈"),
            3 => Some("🥉"),
            _ => None,
        }
    }
}

fn user(id: u32, name: &str, photo: u32, eco_points: u64) -> User {
    User {
        id,
        name: name.to_string(),
        avatar_url: format!("https://picsum.photos/id/{photo}/100/100"),
        eco_points,
    }
}

/// The built-in leaderboard entries
pub fn users() -> Vec<User> {
    vec![
        user(1, "Alex Green", 1005, 15200),
        user(2, "Brenda Eco", 1011, 14500),
        user(3, CURRENT_USER_NAME, 1025, 13900),
        user(4, "Charlie Leaf", 1027, 12800),
        user(5, "Diana Soil", 1028, 11500),
    ]
}

/// Rank users by EcoPoints, highest first. Ties keep input order.
pub fn ranked(mut users: Vec<User>) -> Vec<RankedUser> {
    users.sort_by(|a, b| b.eco_points.cmp(&a.eco_points));
    users
        .into_iter()
        .enumerate()
        .map(|(i, user)| RankedUser {
            rank: i + 1,
            is_current_user: user.name == CURRENT_USER_NAME,
            user,
        })
        .collect()
}
