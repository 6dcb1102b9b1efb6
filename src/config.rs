// Fixed constants of the background network. There is no runtime configuration;
// the struct exists so tests can shrink the field.

pub const DEFAULT_CANVAS_ID: &str = "network";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub node_count: usize,
    pub group_count: usize,
    // Pairs strictly closer than this are linked
    pub max_distance: f64,
    // Half the side of the square each cluster scatters its particles over
    pub spawn_spread: f64,
    pub link_alpha: f64,
}

impl NetworkConfig {
    pub const NODE_COUNT: usize = 200;
    pub const GROUP_COUNT: usize = 100;
    pub const MAX_DISTANCE: f64 = 100.0;
    pub const SPAWN_SPREAD: f64 = 50.0;
    pub const LINK_ALPHA: f64 = 0.5;

    pub fn nodes_per_group(&self) -> usize {
        if self.group_count == 0 {
            0
        } else {
            self.node_count / self.group_count
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            node_count: NetworkConfig::NODE_COUNT,
            group_count: NetworkConfig::GROUP_COUNT,
            max_distance: NetworkConfig::MAX_DISTANCE,
            spawn_spread: NetworkConfig::SPAWN_SPREAD,
            link_alpha: NetworkConfig::LINK_ALPHA,
        }
    }
}
