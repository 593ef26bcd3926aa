use embedded_hal::adc::{Channel, OneShot};

/// Averages repeated reads of one ADC channel.
#[derive(Debug)]
pub struct Sampler<Pin> {
    pin: Pin,
    samples: u32,
}

impl<Pin> Sampler<Pin> {
    /// Returns a sampler that averages `samples` reads of `pin`.
    ///
    /// `samples` must be non-zero or this function will panic when
    /// running in debug mode.
    pub fn new<ADC>(pin: Pin, samples: u32) -> Self
    where
        Pin: Channel<ADC>,
    {
        debug_assert!(samples > 0, "At least one read is needed per sample");

        Self { pin, samples }
    }

    /// Destroys the sampler and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    /// Reads the channel `samples` times, blocking on each conversion, and
    /// returns the truncated mean.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::Sampler;
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 3] = [
    /// #     Transaction::read(0, 100),
    /// #     Transaction::read(0, 101),
    /// #     Transaction::read(0, 103),
    /// # ];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let mut sampler = Sampler::new(pin, 3);
    ///
    /// // (100 + 101 + 103) / 3
    /// assert_eq!(sampler.read(&mut adc), Ok(101));
    /// ```
    pub fn read<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<u32, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let samples = self.samples.max(1);
        let mut sum: u64 = 0;

        for _ in 0..samples {
            let word: u32 = nb::block!(adc.read(&mut self.pin))?.into();
            sum += u64::from(word);
        }

        Ok((sum / u64::from(samples)) as u32)
    }
}
