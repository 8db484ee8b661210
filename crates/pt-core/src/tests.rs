//! Unit tests for pt-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(18.5204, 73.8567);
        assert_eq!(p.distance_km(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.195 km on a 6371 km sphere.
        let a = GeoPoint::new(18.0, 73.0);
        let b = GeoPoint::new(19.0, 73.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        // A degree of longitude at 60° N is about half a degree at the equator.
        let eq = GeoPoint::new(0.0, 0.0).distance_km(GeoPoint::new(0.0, 1.0));
        let north = GeoPoint::new(60.0, 0.0).distance_km(GeoPoint::new(60.0, 1.0));
        assert!((north / eq - 0.5).abs() < 0.01, "ratio {}", north / eq);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(27.1767, 78.0081);
        let b = GeoPoint::new(26.9124, 75.7873);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-12);
    }
}

#[cfg(test)]
mod cancel {
    use crate::CancelToken;

    #[test]
    fn fresh_token_is_live() {
        assert!(!CancelToken::new().is_cancelled());
        assert!(!CancelToken::default().is_cancelled());
    }

    #[test]
    fn cancel_latches() {
        let token = CancelToken::new();
        token.cancel();
        assert!(token.is_cancelled());
        // No reset: repeated checks stay cancelled.
        assert!(token.is_cancelled());
    }

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let held_by_search = token.clone();
        assert!(!held_by_search.is_cancelled());
        token.cancel();
        assert!(held_by_search.is_cancelled());
    }

    #[test]
    fn independent_tokens_do_not_interfere() {
        let a = CancelToken::new();
        let b = CancelToken::new();
        a.cancel();
        assert!(!b.is_cancelled());
    }
}

#[cfg(test)]
mod error {
    use crate::PtError;

    #[test]
    fn unknown_algorithm_message() {
        let e = PtError::UnknownAlgorithm("bellman-ford".into());
        let msg = e.to_string();
        assert!(msg.contains("bellman-ford"), "got {msg:?}");
        assert!(msg.contains("dijkstra"), "got {msg:?}");
    }
}
