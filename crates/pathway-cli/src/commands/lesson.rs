use pathway_core::lesson::lesson_for;
use pathway_core::practice::Topic;
use pathway_core::storage::Config;

pub fn run(topic: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let topic = match topic {
        Some(id) => Topic::parse(&id),
        None => Topic::parse(&Config::load()?.practice.default_topic),
    };
    let lesson = lesson_for(topic);

    println!("{}\n", lesson.title);
    println!("{}\n", lesson.intro);
    for line in lesson.body {
        println!("  {line}");
    }
    if let Some(tip) = lesson.tip {
        println!("\nTip: {tip}");
    }
    println!("\nPractice this topic with: practice start {}", topic.as_str());

    Ok(())
}
