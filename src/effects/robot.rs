//! Cleaning robot controller that runs commands against hardware.

use crate::config::RobotConfig;
use crate::core::{ChargeLevel, Command, PositionTracker, PowerStatus, RobotState};
use crate::effects::hardware::{BatteryGauge, CleaningOutputs, ObstacleSensor, RobotHardware};
use crate::effects::outcome::{CommandOutcome, CommandStep};
use crate::error::{Result, RobotError};
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;
use tracing::{debug, info, warn};

/// Controller tying the position tracker to the robot's hardware.
///
/// Commands run in two phases. [`step`](Self::step) builds an effect that
/// reads the sensors, drives the motors and yields the next state without
/// touching the tracker. [`apply`](Self::apply) commits that result.
/// [`execute`](Self::execute) does both.
#[derive(Clone, Debug, Default)]
pub struct CleaningRobot {
    tracker: PositionTracker,
    config: RobotConfig,
}

impl CleaningRobot {
    /// Create a controller in the initial state
    pub fn new(config: RobotConfig) -> Self {
        Self {
            tracker: PositionTracker::new(),
            config,
        }
    }

    /// Reset position and heading
    pub fn initialize_robot(&mut self) {
        self.tracker.initialize();
    }

    /// Current status string (pure)
    pub fn robot_status(&self) -> String {
        self.tracker.status()
    }

    /// Current state (pure)
    pub fn state(&self) -> &RobotState {
        self.tracker.state()
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Read the infrared sensor once.
    pub fn obstacle_found<Env>(&self) -> BoxedEffect<bool, RobotError, Env>
    where
        Env: ObstacleSensor + Clone + Send + Sync + 'static,
    {
        from_fn(|env: &Env| env.obstacle_ahead().map_err(RobotError::from)).boxed()
    }

    /// Read the battery and switch the cleaning system and recharge LED.
    pub fn manage_cleaning_system<Env>(&self) -> BoxedEffect<PowerStatus, RobotError, Env>
    where
        Env: BatteryGauge + CleaningOutputs + Clone + Send + Sync + 'static,
    {
        let threshold = self.config.power.charge_threshold;
        from_fn(move |env: &Env| switch_cleaning_outputs(env, threshold)).boxed()
    }

    /// Evaluate one command against the hardware.
    /// After running the effect, call apply() to update the tracker.
    pub fn step<Env>(&self, command: Command) -> BoxedEffect<CommandStep, RobotError, Env>
    where
        Env: RobotHardware + Clone + Send + Sync + 'static,
    {
        let from = *self.tracker.state();
        let config = self.config;

        from_fn(move |env: &Env| run_command(env, &config, command, from))
            .map(move |outcome| CommandStep {
                command,
                from,
                outcome,
            })
            .boxed()
    }

    /// Commit the result of step() and return its outcome.
    ///
    /// A step computed from a state other than the current one is rejected
    /// and the tracker is left untouched.
    pub fn apply(&mut self, step: CommandStep) -> Result<CommandOutcome> {
        let current = *self.tracker.state();
        if step.from != current {
            warn!(
                expected = %step.from,
                actual = %current,
                "rejected step computed from a different state"
            );
            return Err(RobotError::StaleStep {
                expected: step.from,
                actual: current,
            });
        }

        match &step.outcome {
            CommandOutcome::Executed(state) => {
                debug!(command = %step.command, status = %state, "command executed");
            }
            CommandOutcome::Refused(state) => {
                info!(command = %step.command, status = %state, "command refused on low battery");
            }
        }

        self.tracker.commit(*step.outcome.state());
        Ok(step.outcome)
    }

    /// Decode a command character, run it and commit the result.
    ///
    /// Unknown characters fail before any hardware is touched.
    pub async fn execute<Env>(&mut self, input: char, env: &Env) -> Result<CommandOutcome>
    where
        Env: RobotHardware + Clone + Send + Sync + 'static,
    {
        let command = Command::try_from(input)
            .inspect_err(|e| warn!(error = %e, "rejected command"))?;
        let step = self.step::<Env>(command).run(env).await?;
        self.apply(step)
    }

    /// Like execute(), returning the outcome in status string form.
    pub async fn execute_command<Env>(&mut self, input: char, env: &Env) -> Result<String>
    where
        Env: RobotHardware + Clone + Send + Sync + 'static,
    {
        let outcome = self.execute(input, env).await?;
        Ok(outcome.to_string())
    }
}

fn read_power<Env: BatteryGauge>(env: &Env, threshold: u8) -> Result<PowerStatus> {
    let charge = ChargeLevel::new(env.charge_left()?)?;
    let status = PowerStatus::from_charge(charge, threshold);
    if status.recharge_indicator {
        warn!(charge = charge.percent(), threshold, "battery needs recharging");
    }
    Ok(status)
}

fn switch_cleaning_outputs<Env>(env: &Env, threshold: u8) -> Result<PowerStatus>
where
    Env: BatteryGauge + CleaningOutputs,
{
    let status = read_power(env, threshold)?;
    env.set_cleaning_system(status.cleaning_enabled)?;
    env.set_recharge_led(status.recharge_indicator)?;
    Ok(status)
}

fn run_command<Env: RobotHardware>(
    env: &Env,
    config: &RobotConfig,
    command: Command,
    from: RobotState,
) -> Result<CommandOutcome> {
    if config.motion.gate_on_battery {
        let power = read_power(env, config.power.charge_threshold)?;
        if !power.is_charged() {
            return Ok(CommandOutcome::Refused(from.without_obstacle()));
        }
    }

    let next = match command.turn() {
        Some(direction) => {
            env.rotate(direction)?;
            from.turned(direction)
        }
        None => {
            let moved = from.moved_forward(env.obstacle_ahead()?);
            if moved.obstacle.is_none() {
                env.drive_forward()?;
            }
            moved
        }
    };

    Ok(CommandOutcome::Executed(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Heading, Position, Turn};
    use crate::effects::hardware::Motors;
    use crate::error::HardwareError;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        ReadSensor,
        ReadCharge,
        DriveForward,
        Rotate(Turn),
        CleaningSystem(bool),
        RechargeLed(bool),
    }

    #[derive(Clone)]
    struct TestEnv {
        obstacle: bool,
        charge: u8,
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl TestEnv {
        fn new(charge: u8) -> Self {
            Self {
                obstacle: false,
                charge,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn blocked(charge: u8) -> Self {
            Self {
                obstacle: true,
                ..Self::new(charge)
            }
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ObstacleSensor for TestEnv {
        fn obstacle_ahead(&self) -> std::result::Result<bool, HardwareError> {
            self.record(Call::ReadSensor);
            Ok(self.obstacle)
        }
    }

    impl BatteryGauge for TestEnv {
        fn charge_left(&self) -> std::result::Result<u8, HardwareError> {
            self.record(Call::ReadCharge);
            Ok(self.charge)
        }
    }

    impl Motors for TestEnv {
        fn drive_forward(&self) -> std::result::Result<(), HardwareError> {
            self.record(Call::DriveForward);
            Ok(())
        }

        fn rotate(&self, direction: Turn) -> std::result::Result<(), HardwareError> {
            self.record(Call::Rotate(direction));
            Ok(())
        }
    }

    impl CleaningOutputs for TestEnv {
        fn set_cleaning_system(&self, on: bool) -> std::result::Result<(), HardwareError> {
            self.record(Call::CleaningSystem(on));
            Ok(())
        }

        fn set_recharge_led(&self, on: bool) -> std::result::Result<(), HardwareError> {
            self.record(Call::RechargeLed(on));
            Ok(())
        }
    }

    #[tokio::test]
    async fn step_does_not_commit_until_applied() {
        let mut robot = CleaningRobot::default();
        let env = TestEnv::new(90);

        let step = robot.step(Command::Forward).run(&env).await.unwrap();
        assert_eq!(robot.robot_status(), "(0,0,N)");
        assert_eq!(step.from, RobotState::initial());

        let outcome = robot.apply(step).unwrap();
        assert_eq!(outcome.to_string(), "(0,1,N)");
        assert_eq!(robot.robot_status(), "(0,1,N)");
    }

    #[tokio::test]
    async fn stale_step_is_rejected_after_reinitialize() {
        let mut robot = CleaningRobot::default();
        let env = TestEnv::new(90);

        robot.execute('l', &env).await.unwrap();
        let step = robot.step(Command::Forward).run(&env).await.unwrap();
        assert_eq!(step.from.to_string(), "(0,0,E)");

        robot.initialize_robot();
        let result = robot.apply(step);

        match result {
            Err(RobotError::StaleStep { expected, actual }) => {
                assert_eq!(expected, step.from);
                assert_eq!(actual, RobotState::initial());
            }
            other => panic!("Expected stale step error, got {:?}", other),
        }
        assert_eq!(robot.robot_status(), "(0,0,N)");
    }

    #[tokio::test]
    async fn step_applies_only_once() {
        let mut robot = CleaningRobot::default();
        let env = TestEnv::new(90);

        let step = robot.step(Command::Forward).run(&env).await.unwrap();
        robot.apply(step).unwrap();

        assert!(matches!(
            robot.apply(step),
            Err(RobotError::StaleStep { .. })
        ));
        assert_eq!(robot.robot_status(), "(0,1,N)");
    }

    #[tokio::test]
    async fn grid_edge_blocks_without_driving() {
        let edge = RobotState::new(Position::new(Position::MAX_COORD, 0), Heading::West).unwrap();
        let mut robot = CleaningRobot::default();
        robot.tracker.commit(edge);
        let env = TestEnv::new(90);

        let status = robot.execute_command('f', &env).await.unwrap();

        assert_eq!(status, "(9223372036854775806,0,W)(9223372036854775807,0)");
        assert_eq!(env.calls(), vec![Call::ReadSensor]);
    }

    #[tokio::test]
    async fn turn_rotates_without_driving() {
        let mut robot = CleaningRobot::default();
        let env = TestEnv::new(90);

        let status = robot.execute_command('l', &env).await.unwrap();

        assert_eq!(status, "(0,0,E)");
        assert_eq!(env.calls(), vec![Call::Rotate(Turn::Left)]);
    }

    #[tokio::test]
    async fn forward_reads_sensor_then_drives() {
        let mut robot = CleaningRobot::default();
        let env = TestEnv::new(90);

        robot.execute('f', &env).await.unwrap();

        assert_eq!(env.calls(), vec![Call::ReadSensor, Call::DriveForward]);
    }

    #[tokio::test]
    async fn blocked_forward_does_not_drive() {
        let mut robot = CleaningRobot::default();
        let env = TestEnv::blocked(90);

        let status = robot.execute_command('f', &env).await.unwrap();

        assert_eq!(status, "(0,0,N)(0,1)");
        assert_eq!(env.calls(), vec![Call::ReadSensor]);
    }

    #[tokio::test]
    async fn unknown_command_touches_nothing() {
        let mut robot = CleaningRobot::default();
        let env = TestEnv::new(90);

        let result = robot.execute('x', &env).await;

        assert!(matches!(result, Err(RobotError::Command(_))));
        assert!(env.calls().is_empty());
        assert_eq!(robot.robot_status(), "(0,0,N)");
    }

    #[tokio::test]
    async fn battery_is_ignored_unless_gated() {
        let mut robot = CleaningRobot::default();
        let env = TestEnv::new(5);

        let status = robot.execute_command('f', &env).await.unwrap();

        assert_eq!(status, "(0,1,N)");
        assert!(!env.calls().contains(&Call::ReadCharge));
    }

    #[tokio::test]
    async fn gated_command_is_refused_on_low_battery() {
        let mut robot = CleaningRobot::new(RobotConfig::gated());
        let env = TestEnv::new(9);

        let outcome = robot.execute('r', &env).await.unwrap();

        assert!(outcome.is_refused());
        assert_eq!(outcome.to_string(), "!(0,0,N)");
        assert_eq!(env.calls(), vec![Call::ReadCharge]);
    }

    #[tokio::test]
    async fn refusal_clears_obstacle_report() {
        let state = RobotState::new(Position::ORIGIN, Heading::West)
            .unwrap()
            .moved_forward(true);
        let mut robot = CleaningRobot::new(RobotConfig::gated());
        robot.tracker.commit(state);
        let env = TestEnv::new(3);

        let status = robot.execute_command('f', &env).await.unwrap();

        assert_eq!(status, "!(0,0,W)");
        assert_eq!(robot.state().obstacle, None);
    }

    #[tokio::test]
    async fn gated_command_runs_when_charged() {
        let mut robot = CleaningRobot::new(RobotConfig::gated());
        let env = TestEnv::new(11);

        let status = robot.execute_command('f', &env).await.unwrap();

        assert_eq!(status, "(0,1,N)");
        assert_eq!(
            env.calls(),
            vec![Call::ReadCharge, Call::ReadSensor, Call::DriveForward]
        );
    }

    #[tokio::test]
    async fn manage_cleaning_system_writes_outputs_in_order() {
        let robot = CleaningRobot::default();
        let env = TestEnv::new(9);

        let status = robot.manage_cleaning_system().run(&env).await.unwrap();

        assert!(!status.cleaning_enabled);
        assert!(status.recharge_indicator);
        assert_eq!(
            env.calls(),
            vec![
                Call::ReadCharge,
                Call::CleaningSystem(false),
                Call::RechargeLed(true)
            ]
        );
    }

    #[tokio::test]
    async fn obstacle_found_reads_sensor() {
        let robot = CleaningRobot::default();

        let env = TestEnv::blocked(50);
        assert!(robot.obstacle_found().run(&env).await.unwrap());
        assert_eq!(env.calls(), vec![Call::ReadSensor]);

        let env = TestEnv::new(50);
        assert!(!robot.obstacle_found().run(&env).await.unwrap());
    }

    #[tokio::test]
    async fn initialize_robot_resets_tracker() {
        let mut robot = CleaningRobot::default();
        let env = TestEnv::new(90);
        robot.execute('l', &env).await.unwrap();
        robot.execute('f', &env).await.unwrap();

        robot.initialize_robot();

        assert_eq!(robot.robot_status(), "(0,0,N)");
    }
}
