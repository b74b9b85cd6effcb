use mcatools::hist::Spectrum;
use mcatools::COUNT_CAP;
use rand::prelude::*;

#[test]
fn saturation_at_cap() {
    let mut s = Spectrum::new(4);
    for _ in 0..u64::from(COUNT_CAP) {
        s.record(7);
    }
    assert_eq!(s.hist.get(7), COUNT_CAP);
    assert_eq!(s.stats.events, u64::from(COUNT_CAP));
    assert_eq!(s.stats.maximum, COUNT_CAP);

    // One more pulse on the full bucket: counter and maximum hold,
    // the event count still advances
    s.record(7);
    assert_eq!(s.hist.get(7), COUNT_CAP);
    assert_eq!(s.stats.events, u64::from(COUNT_CAP) + 1);
    assert_eq!(s.stats.maximum, COUNT_CAP);
}

#[test]
fn maximum_matches_rescan() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut s = Spectrum::new(8);
    for i in 0..50_000u64 {
        s.record(rng.gen_range(0..s.hist.len()) as u16);
        if i % 1000 == 0 {
            assert_eq!(s.stats.maximum, s.hist.max());
        }
    }
    assert_eq!(s.stats.maximum, s.hist.max());
    assert_eq!(s.stats.events, 50_000);

    s.clear();
    assert_eq!(s.stats.maximum, 0);
    assert_eq!(s.stats.maximum, s.hist.max());
}

#[test]
fn counters_never_decrease() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut s = Spectrum::new(6);
    let mut shadow = vec![0u16; s.hist.len()];
    for _ in 0..20_000 {
        let ch = rng.gen_range(0..s.hist.len()) as u16;
        let before = s.hist.get(ch);
        s.record(ch);
        assert!(s.hist.get(ch) >= before);
        assert!(s.hist.get(ch) <= COUNT_CAP);
        shadow[ch as usize] = shadow[ch as usize].saturating_add(1);
    }
    assert_eq!(s.dump(), shadow);
}

#[test]
fn dump_shape() {
    let mut s = Spectrum::new(11);
    assert_eq!(s.dump().len(), 2048);
    s.record(2047);
    let d = s.dump();
    assert_eq!(d[2047], 1);
    assert!(d[..2047].iter().all(|&c| c == 0));
}
