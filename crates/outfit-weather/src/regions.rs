//! Regions offered by the weather dashboard and their forecast grid points.

use crate::types::GridPoint;

/// A named region and its forecast grid point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub grid: GridPoint,
}

const fn region(name: &'static str, nx: u16, ny: u16) -> Region {
    Region {
        name,
        grid: GridPoint::new(nx, ny),
    }
}

/// Metropolitan cities and provinces, in selector order
pub const REGIONS: [Region; 17] = [
    region("서울", 60, 127),
    region("부산", 98, 76),
    region("대구", 89, 90),
    region("인천", 55, 124),
    region("광주", 58, 74),
    region("대전", 67, 100),
    region("울산", 102, 84),
    region("세종", 66, 103),
    region("경기", 60, 120),
    region("강원", 73, 134),
    region("충북", 69, 107),
    region("충남", 68, 100),
    region("전북", 63, 89),
    region("전남", 51, 67),
    region("경북", 89, 91),
    region("경남", 91, 77),
    region("제주", 52, 38),
];

pub fn find_region(name: &str) -> Option<&'static Region> {
    let name = name.trim();
    REGIONS.iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_region() {
        let seoul = find_region("서울").unwrap();
        assert_eq!(seoul.grid, GridPoint::new(60, 127));

        let jeju = find_region(" 제주 ").unwrap();
        assert_eq!(jeju.grid, GridPoint::new(52, 38));
    }

    #[test]
    fn test_unknown_region() {
        assert!(find_region("Seoul").is_none());
        assert!(find_region("").is_none());
    }

    #[test]
    fn test_region_names_are_unique() {
        let names: std::collections::HashSet<_> = REGIONS.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), REGIONS.len());
    }
}
