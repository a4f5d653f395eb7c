use search::{SolveStatistics, HISTOGRAM_BINS};

#[test]
fn summary_of_a_known_sample() {
    let sample = [100usize, 200, 300, 400];
    let stats = SolveStatistics::from_sample(&sample);
    assert_eq!(stats.trials, 4);
    assert!((stats.mean - 250.0).abs() < 1e-9);
    assert_eq!(stats.min, 100);
    assert_eq!(stats.max, 400);
    assert_eq!(stats.median, 300);
    // population standard deviation, sqrt(12500)
    assert!((stats.std_dev - 111.80339887498948).abs() < 1e-6);
}

#[test]
fn histogram_counts_cover_the_whole_sample() {
    let sample: Vec<usize> = (0..250).map(|i| 100 + (i * 7) % 900).collect();
    let stats = SolveStatistics::from_sample(&sample);
    assert_eq!(stats.histogram.len(), HISTOGRAM_BINS);
    let total: u32 = stats.histogram.iter().map(|b| b.count).sum();
    assert_eq!(total as usize, sample.len());
}

#[test]
fn histogram_bins_are_contiguous() {
    let sample = [10usize, 20, 30, 40, 50];
    let stats = SolveStatistics::from_sample(&sample);
    for pair in stats.histogram.windows(2) {
        assert!((pair[0].upper - pair[1].lower).abs() < 1e-9);
    }
    assert!((stats.histogram[0].lower - 10.0).abs() < 1e-9);
}

#[test]
fn empty_sample_yields_an_empty_summary() {
    let stats = SolveStatistics::from_sample(&[]);
    assert_eq!(stats.trials, 0);
    assert!(stats.histogram.is_empty());
}

#[test]
fn constant_sample_has_zero_spread() {
    let stats = SolveStatistics::from_sample(&[42; 10]);
    assert_eq!(stats.mean, 42.0);
    assert_eq!(stats.std_dev, 0.0);
    assert_eq!(stats.min, 42);
    assert_eq!(stats.max, 42);
    assert_eq!(stats.median, 42);
}
