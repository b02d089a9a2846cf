//! Joined / joinable channel partitioning.

use {harbor_protocol::Channel, std::collections::HashSet};

/// Filter the global channel list down to channels the caller has not joined.
///
/// Equality is by channel id only, input order is preserved, and each
/// surviving id appears exactly once. The joined list is whatever the caller
/// holds in memory: a just-completed join is reflected on the next call with
/// no server round-trip.
#[must_use]
pub fn joinable(joined: &[Channel], all: &[Channel]) -> Vec<Channel> {
    let joined_ids: HashSet<i64> = joined.iter().map(|channel| channel.id).collect();
    let mut seen = HashSet::new();
    all.iter()
        .filter(|channel| !joined_ids.contains(&channel.id) && seen.insert(channel.id))
        .cloned()
        .collect()
}

/// Whether a channel id appears in the joined list.
#[must_use]
pub fn is_joined(joined: &[Channel], channel_id: i64) -> bool {
    joined.iter().any(|channel| channel.id == channel_id)
}
