/// Audio buffers for one block. Input channels may be unconnected and read
/// as silence; output channels are always present. All connected buffers
/// must have the same length, checked once per call.
pub struct AudioIo<'a, 'b> {
    pub in_a_left: Option<&'a [f32]>,
    pub in_a_right: Option<&'a [f32]>,
    pub in_b_left: Option<&'a [f32]>,
    pub in_b_right: Option<&'a [f32]>,
    pub out_a_left: &'b mut [f32],
    pub out_a_right: &'b mut [f32],
    pub out_b_left: &'b mut [f32],
    pub out_b_right: &'b mut [f32],
}

impl<'a, 'b> AudioIo<'a, 'b> {
    fn len(&self) -> usize {
        self.out_a_left.len()
    }

    fn check_lengths(&self) {
        let n = self.len();
        assert_eq!(self.out_a_right.len(), n);
        assert_eq!(self.out_b_left.len(), n);
        assert_eq!(self.out_b_right.len(), n);
        for input in &[
            self.in_a_left,
            self.in_a_right,
            self.in_b_left,
            self.in_b_right,
        ] {
            if let Some(buffer) = input {
                assert_eq!(buffer.len(), n);
            }
        }
    }
}

pub struct CrossFader {
    value: f32,
}

// value 0.0 routes input a at full gain, 1.0 routes input b; the gains are
// complementary so the total level stays constant under the linear law
impl CrossFader {
    pub fn new(value: f32) -> CrossFader {
        CrossFader { value }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Ramps the fade value linearly toward `target`, covering the whole
    /// remaining distance within this one block, and writes the faded
    /// a-side and b-side outputs. The fade time therefore follows the block
    /// size, not the clock.
    pub fn process_block(&mut self, target: f32, io: &mut AudioIo) {
        io.check_lengths();
        let n = io.len();
        if n == 0 {
            return;
        }
        let step = (target - self.value) / n as f32;
        for i in 0..n {
            self.value = f32::clamp(self.value + step, 0.0, 1.0);
            let a_left = io.in_a_left.map_or(0.0, |buffer| buffer[i]);
            let a_right = io.in_a_right.map_or(0.0, |buffer| buffer[i]);
            let b_left = io.in_b_left.map_or(0.0, |buffer| buffer[i]);
            let b_right = io.in_b_right.map_or(0.0, |buffer| buffer[i]);
            let gain_a = 1.0 - self.value;
            let gain_b = self.value;
            io.out_a_left[i] = a_left * gain_a;
            io.out_a_right[i] = a_right * gain_a;
            io.out_b_left[i] = b_left * gain_b;
            io.out_b_right[i] = b_right * gain_b;
        }
    }
}
