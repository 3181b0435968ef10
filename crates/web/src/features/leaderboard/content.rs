use storage::models::CompetitionWindow;

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Prize competition announcement shown below the leaderboard, as markdown.
pub fn prize_info(window: &CompetitionWindow) -> String {
    let start = window.start_date.format(DISPLAY_DATE_FORMAT);
    let end = window.end_date.format(DISPLAY_DATE_FORMAT);
    let claim_deadline = window.claim_deadline.format(DISPLAY_DATE_FORMAT);

    format!(
        r#"### Competition 🏆

If you contribute to Song Describer, you'll also have a chance to win one of our prizes!

As a way to say thank you for your time and effort, we will send you a music-related gift
voucher of your choice (e.g. for music stores, streaming platforms, online music magazines, etc.)
if you are among the 3 users with the highest overall score during the competition period:

* 🥇 1st place: £50
* 🥈 2nd place: £30
* 🥉 3rd place: £10

The competition opens on {start} and ends on {end} GMT.

#### How do I enter the competition?
All users contributing to Song Describer while the competition is running will automatically be considered
participants.

#### How are contributions evaluated?
You will be awarded points every time you complete an annotation or evaluation.
The overall contribution score is computed as follows:
* 5 points for every annotation
* 1 point for every evaluation

If you'd like to save your progress and come back to Song Describer later on, you can log back onto
your profile by providing your unique user ID. If you're unable to provide your user ID, you will
not be able to recover your profile and you'll lose your progress.

If you'd like to publicly track your progress on the leaderboard, you can also choose a nickname
when you create your profile.

#### How do I claim my prize?
If you're one of the top 3 ranked contributors on our leaderboard when the competition ends, you
can claim your prize by emailing your unique user ID to [i.manco@qmul.ac.uk](mailto:i.manco@qmul.ac.uk)
by {claim_deadline}. Please note, if you cannot provide your user ID, we will not be able to verify your
contributions and you won't be able to claim your prize.

We will check that your contributions adhere to the annotation guidelines outlined on this platform
and we reserve the right to refuse to award the prize if we find, at our sole discretion, that the
guidelines were not followed.
"#
    )
}
