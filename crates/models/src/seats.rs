/// Seat accounting for the capacity check.
///
/// A room admits a new guest while its occupant count is strictly below
/// `seat_count`. A non-positive seat count admits nobody.
pub fn has_vacancy(seat_count: i32, occupied: u64) -> bool {
    seat_count > 0 && occupied < seat_count as u64
}

/// Whether `occupied` guests still fit after a room's seat count changes.
pub fn fits(seat_count: i32, occupied: u64) -> bool {
    occupied == 0 || (seat_count > 0 && occupied <= seat_count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacancy_is_strictly_below_seat_count() {
        assert!(has_vacancy(2, 0));
        assert!(has_vacancy(2, 1));
        assert!(!has_vacancy(2, 2));
        assert!(!has_vacancy(2, 3));
    }

    #[test]
    fn zero_or_negative_seats_admit_nobody() {
        assert!(!has_vacancy(0, 0));
        assert!(!has_vacancy(-1, 0));
    }

    #[test]
    fn shrinking_below_occupancy_does_not_fit() {
        assert!(fits(2, 2));
        assert!(!fits(1, 2));
        assert!(fits(0, 0));
        assert!(!fits(0, 1));
    }
}
