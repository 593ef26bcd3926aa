use crate::{
    bands::Bands,
    config::Config,
    display::{self, Panel},
    divider::resistance,
    e24::commercial_value,
    error::{Error, MeasureError},
    matrix,
    sampler::Sampler,
};
use embedded_hal::{
    adc::{Channel, OneShot},
    blocking::delay::{DelayMs, DelayUs},
};
use log::{info, warn};
use smart_leds::{SmartLedsWrite, RGB8};

/// Everything shown for one measurement. All outputs of a tick are drawn
/// from the same `Reading`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Averaged ADC code.
    pub sample: u32,
    /// Estimated resistance (ohms).
    pub ohms: f32,
    /// Nearest E24 value (ohms).
    pub commercial: u32,
    pub bands: Bands,
}

impl Reading {
    /// Runs the numeric pipeline on an averaged ADC code.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::{Color, Config, Reading};
    ///
    /// let reading = Reading::from_sample(1365, &Config::DEFAULT).unwrap();
    ///
    /// assert_eq!(reading.ohms, 5_000.0);
    /// assert_eq!(reading.commercial, 5_100);
    /// assert_eq!(reading.bands.colors(), [Color::Green, Color::Brown, Color::Red]);
    /// ```
    pub fn from_sample(sample: u32, config: &Config) -> Result<Reading, MeasureError> {
        let ohms = resistance(sample, config.reference_ohms, config.max_code())?;
        let commercial = commercial_value(ohms)?;
        let bands = Bands::decode(commercial)?;

        Ok(Reading {
            sample,
            ohms,
            commercial,
            bands,
        })
    }
}

type AdcError<Adc, ADC, Word, Pin> = <Adc as OneShot<ADC, Word, Pin>>::Error;

/// A resistor meter on one ADC channel.
#[derive(Debug)]
pub struct Ohmmeter<Pin> {
    sampler: Sampler<Pin>,
    config: Config,
}

impl<Pin> Ohmmeter<Pin> {
    /// Returns a meter reading `pin` with the provided `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::{Config, Ohmmeter};
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 2730)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let mut meter = Ohmmeter::new(
    ///     pin,
    ///     Config {
    ///         samples: 1,
    ///         ..Config::DEFAULT
    ///     },
    /// );
    ///
    /// // 2/3 of full scale across a 10 kΩ reference
    /// let reading = meter.measure(&mut adc).unwrap();
    /// assert_eq!(reading.commercial, 20_000);
    /// ```
    pub fn new<ADC>(pin: Pin, config: Config) -> Self
    where
        Pin: Channel<ADC>,
    {
        Self {
            sampler: Sampler::new(pin, config.samples),
            config,
        }
    }

    /// Destroys the meter and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.sampler.free()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Samples the channel and runs the numeric pipeline on the result.
    pub fn measure<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<Reading, Error<AdcError<Adc, ADC, Word, Pin>>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let sample = self.sampler.read(adc).map_err(Error::Adc)?;
        Ok(Reading::from_sample(sample, &self.config)?)
    }

    /// One pass of the control loop: measure, redraw the panel, light the
    /// matrix and log the reading.
    ///
    /// Nothing is drawn when the measurement fails, so the previous
    /// reading stays on screen.
    pub fn tick<Adc, ADC, Word, P, Strip, Delay>(
        &mut self,
        adc: &mut Adc,
        panel: &mut P,
        strip: &mut Strip,
        delay: &mut Delay,
    ) -> Result<Reading, Error<AdcError<Adc, ADC, Word, Pin>, P::Error, Strip::Error>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        P: Panel,
        Strip: SmartLedsWrite<Color = RGB8>,
        Delay: DelayUs<u32>,
    {
        let sample = self.sampler.read(adc).map_err(Error::Adc)?;
        let reading = Reading::from_sample(sample, &self.config)?;

        display::render(panel, &reading).map_err(Error::Display)?;
        panel.flush().map_err(Error::Display)?;
        matrix::show(strip, delay, &reading.bands).map_err(Error::Leds)?;

        info!(
            "adc={} resistance={:.2} commercial={}",
            reading.sample, reading.ohms, reading.commercial
        );

        Ok(reading)
    }

    /// Runs [`tick`](Ohmmeter::tick) every `period_ms` until a driver
    /// fails, and returns that failure.
    ///
    /// Measurement errors (such as an open probe saturating the ADC) are
    /// logged and the loop samples again on the next period.
    pub fn run<Adc, ADC, Word, P, Strip, Delay>(
        &mut self,
        adc: &mut Adc,
        panel: &mut P,
        strip: &mut Strip,
        delay: &mut Delay,
    ) -> Error<AdcError<Adc, ADC, Word, Pin>, P::Error, Strip::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        P: Panel,
        Strip: SmartLedsWrite<Color = RGB8>,
        Delay: DelayUs<u32> + DelayMs<u32>,
    {
        loop {
            match self.tick(adc, panel, strip, delay) {
                Ok(_) => {}
                Err(Error::Measure(error)) => warn!("no reading: {}", error),
                Err(error) => return error,
            }

            delay.delay_ms(self.config.period_ms);
        }
    }
}
