use tileworld_ecs::{ComponentRegistry, KindId};
use tileworld_kernel::{TileGrid, TileKind};

/// Read-only queries over a generated grid for debugging and CLI output.
pub struct GridInspector;

impl GridInspector {
    /// Produce a summary of the grid.
    pub fn summary(grid: &TileGrid) -> GridSummary {
        let counts = TileKind::ALL.map(|kind| (kind, grid.count(kind)));
        GridSummary {
            width: grid.width(),
            height: grid.height(),
            tile_size: grid.tile_size(),
            counts,
            content_hash: grid.content_hash(),
        }
    }
}

/// Summary of a grid for the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSummary {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
    pub counts: [(TileKind, usize); 3],
    pub content_hash: u64,
}

impl GridSummary {
    pub fn count(&self, kind: TileKind) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Fraction of cells that are not water.
    pub fn land_fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let land: usize = self
            .counts
            .iter()
            .filter(|(k, _)| k.is_land())
            .map(|(_, n)| n)
            .sum();
        land as f64 / total as f64
    }
}

impl std::fmt::Display for GridSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Grid: {}x{} tile_size={} hash={:#018x}",
            self.width, self.height, self.tile_size, self.content_hash
        )?;
        for (kind, n) in &self.counts {
            write!(f, " {kind}={n}")?;
        }
        write!(f, " land={:.1}%", self.land_fraction() * 100.0)
    }
}

/// Read-only queries over the component registry.
pub struct RegistryInspector;

impl RegistryInspector {
    pub fn summary(registry: &ComponentRegistry) -> RegistrySummary {
        RegistrySummary {
            issued: registry.issued(),
            kinds: registry
                .kinds()
                .map(|(kind, name, len)| KindInfo {
                    kind,
                    type_name: short_type_name(name),
                    instances: len,
                })
                .collect(),
        }
    }
}

/// Summary of the registry for the inspector.
#[derive(Debug, Clone)]
pub struct RegistrySummary {
    pub issued: u64,
    pub kinds: Vec<KindInfo>,
}

/// One registered component kind.
#[derive(Debug, Clone)]
pub struct KindInfo {
    pub kind: KindId,
    pub type_name: String,
    pub instances: usize,
}

impl std::fmt::Display for RegistrySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Registry: entities={} kinds={}", self.issued, self.kinds.len())?;
        for info in &self.kinds {
            write!(f, "\n  [{}] {} x{}", info.kind.0, info.type_name, info.instances)?;
        }
        Ok(())
    }
}

/// Strip module paths from a type name, keeping generic arguments readable:
/// `alloc::vec::Vec<my::Pos>` becomes `Vec<Pos>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        match c {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(&segment);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileworld_ecs::EntityId;
    use tileworld_kernel::Tile;

    #[test]
    fn grid_summary_counts_kinds() {
        let mut grid = TileGrid::filled(4, 5, 16, TileKind::Water).unwrap();
        grid.set(0, 0, Tile::new(TileKind::Grass));
        grid.set(1, 0, Tile::new(TileKind::Dirt));
        grid.set(2, 0, Tile::new(TileKind::Dirt));

        let summary = GridInspector::summary(&grid);
        assert_eq!(summary.total(), 20);
        assert_eq!(summary.count(TileKind::Water), 17);
        assert_eq!(summary.count(TileKind::Dirt), 2);
        assert_eq!(summary.count(TileKind::Grass), 1);
        assert!((summary.land_fraction() - 0.15).abs() < 1e-12);
        assert_eq!(summary.content_hash, grid.content_hash());
    }

    #[test]
    fn grid_summary_display() {
        let grid = TileGrid::filled(2, 2, 8, TileKind::Grass).unwrap();
        let s = GridInspector::summary(&grid).to_string();
        assert!(s.contains("2x2"));
        assert!(s.contains("grass=4"));
        assert!(s.contains("land=100.0%"));
    }

    #[test]
    fn registry_summary_lists_kinds() {
        struct Health(#[allow(dead_code)] u32);

        let mut reg = ComponentRegistry::new();
        let a = reg.new_entity();
        let b = reg.new_entity();
        reg.write(a, Health(10));
        reg.write(b, Health(3));
        reg.write(b, vec![EntityId(0)]);

        let summary = RegistryInspector::summary(&reg);
        assert_eq!(summary.issued, 2);
        assert_eq!(summary.kinds.len(), 2);
        assert_eq!(summary.kinds[0].type_name, "Health");
        assert_eq!(summary.kinds[0].instances, 2);
        assert_eq!(summary.kinds[1].type_name, "Vec<EntityId>");

        let s = summary.to_string();
        assert!(s.contains("entities=2 kinds=2"));
        assert!(s.contains("[0] Health x2"));
    }

    #[test]
    fn short_type_name_strips_paths() {
        assert_eq!(short_type_name("u32"), "u32");
        assert_eq!(short_type_name("a::b::C"), "C");
        assert_eq!(
            short_type_name("std::collections::HashMap<a::K, b::c::V>"),
            "HashMap<K, V>"
        );
    }
}
