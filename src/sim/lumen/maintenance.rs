use super::config::{ContaminationLevel, MaintenanceInterval};

/// Maintenance factors by contamination level (rows: very clean, clean,
/// normal, dirty) and maintenance interval (columns: 1 to 6 years).
///
/// Each row decreases with the interval and each column decreases with the
/// contamination level.
pub static MAINTENANCE_FACTOR_TABLE: [[f64; 6]; 4] = [
    [0.96, 0.94, 0.92, 0.90, 0.88, 0.87],
    [0.93, 0.89, 0.85, 0.82, 0.79, 0.77],
    [0.89, 0.84, 0.79, 0.75, 0.70, 0.67],
    [0.83, 0.78, 0.73, 0.69, 0.65, 0.62],
];

/// Looks up the maintenance factor. Values are never interpolated.
pub fn maintenance_factor(level: ContaminationLevel, interval: MaintenanceInterval) -> f64 {
    MAINTENANCE_FACTOR_TABLE[level.index()][interval.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_table_lookups() -> Result<()> {
        let mf = maintenance_factor(ContaminationLevel::Normal, MaintenanceInterval::new(2)?);
        assert_eq!(mf, 0.84);
        let mf = maintenance_factor(ContaminationLevel::Dirty, MaintenanceInterval::new(6)?);
        assert_eq!(mf, 0.62);
        let mf = maintenance_factor(ContaminationLevel::VeryClean, MaintenanceInterval::new(1)?);
        assert_eq!(mf, 0.96);
        Ok(())
    }

    #[test]
    fn test_table_is_monotone() -> Result<()> {
        for level in ContaminationLevel::ALL {
            for years in 1..6 {
                let shorter = maintenance_factor(level, MaintenanceInterval::new(years)?);
                let longer = maintenance_factor(level, MaintenanceInterval::new(years + 1)?);
                assert!(longer < shorter, "{level} {years}y");
            }
        }
        for years in 1..=6 {
            let interval = MaintenanceInterval::new(years)?;
            let factors: Vec<f64> = ContaminationLevel::ALL
                .iter()
                .map(|&level| maintenance_factor(level, interval))
                .collect();
            assert!(factors.windows(2).all(|w| w[1] < w[0]), "{years}y");
        }
        Ok(())
    }

    #[test]
    fn test_table_range() {
        for row in MAINTENANCE_FACTOR_TABLE.iter() {
            for &mf in row {
                assert!((0.6..=0.97).contains(&mf));
            }
        }
    }
}
