use anyhow::{Result, bail};

#[derive(Clone)]
pub struct PushbulletConfig {
    pub channel: String,
    pub access_token: String,
}

impl PushbulletConfig {
    pub fn from_args(channel: Option<String>, access_token: Option<String>) -> Result<Self> {
        let channel = match channel {
            Some(channel) if !channel.trim().is_empty() => channel,
            _ => bail!("CHANNEL not set (argument or PUSHBULLET_CHANNEL)"),
        };

        let access_token = match access_token {
            Some(token) if !token.trim().is_empty() => token,
            _ => bail!("ACCESS_TOKEN not set (argument or PUSHBULLET_ACCESS_TOKEN)"),
        };

        Ok(Self {
            channel,
            access_token,
        })
    }
}

impl std::fmt::Debug for PushbulletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushbulletConfig")
            .field("channel", &self.channel)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
