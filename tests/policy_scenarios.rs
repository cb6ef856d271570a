// ==============================================
// POLICY BEHAVIOR SCENARIOS (integration)
// ==============================================
//
// End-to-end walks through each eviction policy using only the public API,
// with scripted create costs and failure lists standing in for a real
// collaborator.

use slotcache::prelude::*;

/// Scripted collaborator: per-id create cost in ticks, optional failure
/// list, and a record of every lifecycle callback.
struct Driver {
    clock: u32,
    costs: Vec<(i32, u32)>,
    fail_ids: Vec<i32>,
    created: Vec<i32>,
    destroyed: Vec<i32>,
}

impl Driver {
    fn new() -> Self {
        Self {
            clock: 0,
            costs: Vec::new(),
            fail_ids: Vec::new(),
            created: Vec::new(),
            destroyed: Vec::new(),
        }
    }

    fn with_costs(costs: &[(i32, u32)]) -> Self {
        Self {
            costs: costs.to_vec(),
            ..Self::new()
        }
    }

    fn cost_of(&self, id: i32) -> u32 {
        self.costs
            .iter()
            .find(|(cost_id, _)| *cost_id == id)
            .map_or(1, |(_, cost)| *cost)
    }
}

impl ResourceHooks for Driver {
    type Payload = String;

    fn create(&mut self, id: i32) -> Option<Context<String>> {
        if self.fail_ids.contains(&id) {
            return None;
        }
        self.clock = self.clock.wrapping_add(self.cost_of(id));
        self.created.push(id);
        Some(Context::new(format!("ctx-{id}"), id.unsigned_abs()))
    }

    fn destroy(&mut self, id: i32, _context: Context<String>) -> bool {
        self.destroyed.push(id);
        true
    }

    fn tick(&mut self) -> Option<u32> {
        Some(self.clock)
    }
}

// ==============================================
// Scenario 1: FIFO evicts the oldest insertion
// ==============================================

#[test]
fn fifo_evicts_the_oldest_and_keeps_the_rest_hitable() {
    let mut cache = CacheManager::new(2, EvictionPolicy::Fifo, Driver::new()).unwrap();

    cache.open(1).unwrap();
    cache.open(2).unwrap();
    cache.open(3).unwrap(); // pool full: evicts id 1, the oldest

    assert_eq!(cache.hooks().destroyed, vec![1]);

    let before = cache.stats().hit_count();
    cache.open(2).unwrap();
    assert_eq!(cache.stats().hit_count(), before + 1);
}

#[test]
fn fifo_keeps_strict_insertion_order_across_many_evictions() {
    let mut cache = CacheManager::new(3, EvictionPolicy::Fifo, Driver::new()).unwrap();

    for id in 1..=9 {
        cache.open(id).unwrap();
    }

    // With no ad-hoc invalidation, evictions replay insertion order.
    assert_eq!(cache.hooks().destroyed, vec![1, 2, 3, 4, 5, 6]);
}

// ==============================================
// Scenario 2: LFU counts references
// ==============================================

#[test]
fn lfu_evicts_the_only_occupant_of_a_single_slot() {
    let mut cache = CacheManager::new(1, EvictionPolicy::Lfu, Driver::new()).unwrap();

    assert_eq!(cache.open(5).unwrap().ref_cnt(), 1);
    assert_eq!(cache.open(5).unwrap().ref_cnt(), 2);

    let node = cache.open(6).unwrap();
    assert_eq!(node.id(), 6);
    assert_eq!(node.ref_cnt(), 1);

    assert_eq!(cache.hooks().created, vec![5, 6]);
    assert_eq!(cache.hooks().destroyed, vec![5]);
}

#[test]
fn lfu_prefers_the_least_referenced_entry() {
    let mut cache = CacheManager::new(3, EvictionPolicy::Lfu, Driver::new()).unwrap();

    cache.open(1).unwrap();
    cache.open(2).unwrap();
    cache.open(3).unwrap();

    // Heat up 1 and 3; id 2 stays at a single reference.
    cache.open(1).unwrap();
    cache.open(3).unwrap();
    cache.open(3).unwrap();

    cache.open(4).unwrap();
    assert_eq!(cache.hooks().destroyed, vec![2]);
}

// ==============================================
// Scenario 3: Life decays, then picks the lowest
// ==============================================

#[test]
fn life_decays_all_entries_before_selecting_the_victim() {
    let mut cache =
        CacheManager::new(3, EvictionPolicy::Life, Driver::with_costs(&[(1, 4)])).unwrap();

    cache.open(1).unwrap(); // time_to_open = 4
    cache.open(2).unwrap();
    cache.open(3).unwrap();

    // Lives are now 1:-2, 2:-1, 3:0; the decay pass in the next open makes
    // them -3/-2/-1 and id 1 is the lowest.
    cache.open(4).unwrap();
    assert_eq!(cache.hooks().destroyed, vec![1]);
}

#[test]
fn life_hits_shield_expensive_entries() {
    let mut cache =
        CacheManager::new(2, EvictionPolicy::Life, Driver::with_costs(&[(1, 50)])).unwrap();

    cache.open(1).unwrap(); // expensive: time_to_open = 50
    cache.open(2).unwrap();

    // One hit rewards id 1 with its creation cost; id 2 only decays.
    cache.open(1).unwrap();

    cache.open(3).unwrap();
    assert_eq!(cache.hooks().destroyed, vec![2]);
}

#[test]
fn lru_hits_reward_recency_not_cost() {
    let mut cache =
        CacheManager::new(2, EvictionPolicy::Lru, Driver::with_costs(&[(2, 50)])).unwrap();

    cache.open(1).unwrap();
    cache.open(2).unwrap(); // expensive, but LRU ignores cost
    cache.open(1).unwrap();
    cache.open(1).unwrap(); // repeated hits keep id 1 ahead of the decay

    cache.open(3).unwrap();
    assert_eq!(cache.hooks().destroyed, vec![2]);
}

// ==============================================
// Scenario 4: invalid usage
// ==============================================

#[test]
fn opening_the_sentinel_fails_for_every_mode() {
    for mode in [
        EvictionPolicy::Life,
        EvictionPolicy::Fifo,
        EvictionPolicy::Lfu,
        EvictionPolicy::Lru,
        EvictionPolicy::Random,
    ] {
        let mut cache = CacheManager::new(2, mode, Driver::new()).unwrap();
        assert_eq!(cache.open(0).unwrap_err(), CacheError::InvalidId, "{mode:?}");
    }
}

#[test]
fn invalidating_an_empty_cache_reports_id_not_found() {
    let mut cache = CacheManager::new(2, EvictionPolicy::Lru, Driver::new()).unwrap();
    assert_eq!(cache.invalidate(99), Err(CacheError::IdNotFound));
}

// ==============================================
// Scenario 5: failed create on a full pool
// ==============================================

#[test]
fn failed_create_under_random_loses_nothing() {
    let mut cache = CacheManager::new(3, EvictionPolicy::Random, Driver::new()).unwrap();

    for id in 1..=3 {
        cache.open(id).unwrap();
    }
    cache.hooks_mut().fail_ids.push(7);

    assert_eq!(cache.open(7).unwrap_err(), CacheError::CreateFailed);

    // No occupant was closed; every prior id still hits.
    assert!(cache.hooks().destroyed.is_empty());
    let before = cache.stats().hit_count();
    for id in 1..=3 {
        assert_eq!(cache.open(id).unwrap().id(), id);
    }
    assert_eq!(cache.stats().hit_count(), before + 3);
}

// ==============================================
// Random mode still bounds the pool
// ==============================================

#[test]
fn random_eviction_maintains_capacity() {
    let mut cache = CacheManager::new(4, EvictionPolicy::Random, Driver::new()).unwrap();

    for id in 1..=50 {
        cache.open(id).unwrap();
        assert!(cache.len() <= 4);
    }
    assert_eq!(cache.len(), 4);
    // 46 opens past the first 4 each closed exactly one victim.
    assert_eq!(cache.hooks().destroyed.len(), 46);
}
