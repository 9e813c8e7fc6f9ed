//! `tankfilter explain` — plain-language descriptions of the response types.

use crate::ResponseArg;

const BUTTERWORTH: &str = "
Butterworth Bandpass Filter Explained
=====================================

A bandpass filter allows signals within a specific frequency range to pass
through while blocking frequencies outside that range. This tool designs
\"coupled resonator\" filters - a series of LC tank circuits connected by
coupling capacitors.

The Butterworth response provides the flattest possible passband - signals
within your frequency range pass through with minimal amplitude variation.
The tradeoff is a gentler transition at the band edges compared to
Chebyshev filters.

Coupled resonator filters use LC \"tanks\" (parallel inductor-capacitor
pairs) tuned to the center frequency. The coupling capacitors between tanks
determine the bandwidth and shape of the response. More resonators give
steeper skirts but require more components.

Key parameters:
  - Center frequency (f0): The middle of your passband
  - Bandwidth (BW): The width of the passband (3dB points)
  - Fractional BW: BW/f0 - keep below 40% for accurate results

Component Q requirement: Inductors must have unloaded Q greater than
(f0/BW)*2 for acceptable insertion loss. Air-core inductors typically
achieve Q of 100-300.

Choose Butterworth when you need the smoothest passband response and can
tolerate a gentler rolloff at the band edges.
";

const CHEBYSHEV: &str = "
Chebyshev Bandpass Filter Explained
===================================

A bandpass filter allows signals within a specific frequency range to pass
through while blocking frequencies outside that range. This tool designs
\"coupled resonator\" filters - a series of LC tank circuits connected by
coupling capacitors.

The Chebyshev response trades passband flatness for steeper rolloff at the
band edges. Small \"ripples\" in the passband allow much sharper rejection
of out-of-band signals compared to Butterworth filters of the same order.

The \"ripple\" parameter controls this tradeoff:
  - 0.1 dB: Nearly flat passband, moderate rolloff improvement
  - 0.5 dB: Good balance of flatness and rolloff (recommended)
  - 1.0 dB: Maximum rolloff steepness, noticeable passband variation

Coupled resonator filters use LC \"tanks\" tuned to the center frequency.
The coupling capacitors between tanks determine bandwidth and response
shape. More resonators give steeper skirts but require more components and
tighter tolerances.

Key parameters:
  - Center frequency (f0): The middle of your passband
  - Bandwidth (BW): The width of the passband (3dB points)
  - Fractional BW: BW/f0 - keep below 40% for accurate results

Component Q requirement: Inductors must have unloaded Q greater than
(f0/BW)*2 for acceptable insertion loss. Chebyshev filters are more
sensitive to component Q than Butterworth.

Important: Chebyshev filters with equal source/load impedances require an
ODD number of resonators (3, 5, 7, or 9). For even resonator counts, use
Butterworth.

Choose Chebyshev when you need sharp rejection of nearby interfering
signals and can tolerate small passband ripple.
";

const BESSEL: &str = "
Bessel Bandpass Filter Explained
================================

A bandpass filter allows signals within a specific frequency range to pass
through while blocking frequencies outside that range. This tool designs
\"coupled resonator\" filters - a series of LC tank circuits connected by
coupling capacitors.

The Bessel response optimizes for flat group delay rather than amplitude:
every frequency inside the passband takes the same time to travel through
the filter. Pulses and digital transitions keep their shape instead of
ringing. The cost is the gentlest rolloff of the three responses - nearby
interference is rejected slowly.

Coupled resonator filters use LC \"tanks\" tuned to the center frequency.
The coupling capacitors between tanks determine bandwidth and response
shape. More resonators sharpen the skirts somewhat but mainly extend the
flat-delay region.

Key parameters:
  - Center frequency (f0): The middle of your passband
  - Bandwidth (BW): The width of the passband (3dB points)
  - Fractional BW: BW/f0 - keep below 40% for accurate results

Component Q requirement: Inductors must have unloaded Q greater than
(f0/BW)*2 for acceptable insertion loss.

Choose Bessel for pulse, data, or transient work where waveform
preservation matters more than rejection of adjacent signals.
";

pub fn run(response: ResponseArg) {
    let text = match response {
        ResponseArg::Butterworth => BUTTERWORTH,
        ResponseArg::Chebyshev => CHEBYSHEV,
        ResponseArg::Bessel => BESSEL,
    };
    println!("{text}");
}
